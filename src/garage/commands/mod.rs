use crate::config::GarageConfig;
use crate::index::DisplayCar;
use std::path::PathBuf;

pub mod cars;
pub mod config;
pub mod details;
pub mod export;
pub mod import;
pub mod photos;
pub mod save_files;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// One row of the save-file listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFileSummary {
    pub name: String,
    pub car_count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub save_files: Vec<SaveFileSummary>,
    /// The save file whose car list should be (re)rendered, if any.
    pub save_file: Option<String>,
    pub listed_cars: Vec<DisplayCar>,
    pub affected_cars: Vec<DisplayCar>,
    pub paths: Vec<PathBuf>,
    pub config: Option<GarageConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_save_files(mut self, save_files: Vec<SaveFileSummary>) -> Self {
        self.save_files = save_files;
        self
    }

    pub fn with_listed_cars(mut self, save_file: &str, cars: Vec<DisplayCar>) -> Self {
        self.save_file = Some(save_file.to_string());
        self.listed_cars = cars;
        self
    }

    pub fn with_affected_cars(mut self, cars: Vec<DisplayCar>) -> Self {
        self.affected_cars = cars;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: GarageConfig) -> Self {
        self.config = Some(config);
        self
    }
}
