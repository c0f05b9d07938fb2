use thiserror::Error;

/// Positions in not-found errors are stored 0-based and printed 1-based, matching
/// what the CLI shows next to each car and detail.
#[derive(Error, Debug)]
pub enum GarageError {
    #[error("Name cannot be empty")]
    InvalidName,

    #[error("A save file named \"{0}\" already exists")]
    DuplicateName(String),

    #[error("Save file not found: {0}")]
    SaveFileNotFound(String),

    #[error("Car {} not found in save file \"{}\"", .position + 1, .save_file)]
    CarNotFound { save_file: String, position: usize },

    #[error("Detail {} not found on car \"{}\"", .position + 1, .car)]
    DetailNotFound { car: String, position: usize },

    #[error("Detail cannot be empty")]
    InvalidDetail,

    #[error("Invalid snapshot: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl GarageError {
    /// True for a missing save file or an out-of-range car/detail position.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GarageError::SaveFileNotFound(_)
                | GarageError::CarNotFound { .. }
                | GarageError::DetailNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GarageError>;
