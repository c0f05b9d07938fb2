use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The whole store: save-file name to its ordered list of cars.
///
/// `IndexMap` keeps save files in insertion order, both in memory and in the
/// serialized document.
pub type Catalog = IndexMap<String, Vec<Car>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub name: String,
    /// Self-contained encoded image (a data URL). Absent until one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

impl Car {
    pub fn new(name: String) -> Self {
        Self {
            name,
            photo: None,
            details: Vec::new(),
        }
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

/// Trims surrounding whitespace and rejects what is left if empty.
/// Interior whitespace is kept as typed.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
