use crate::error::{GarageError, Result};
use crate::store::fs_backend::validate_key;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_STEM: &str = "config";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILENAME: &str = "saveData.json";

/// Configuration for garage, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GarageConfig {
    /// Name of the storage entry holding the catalog
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// File name used by `export` when no output path is given
    #[serde(default = "default_export_filename")]
    pub export_filename: String,

    /// Extensions `import` accepts (e.g. ".json")
    #[serde(default = "default_import_ext")]
    pub import_extensions: Vec<String>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

fn default_import_ext() -> Vec<String> {
    vec![".json".to_string()]
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            export_filename: default_export_filename(),
            import_extensions: default_import_ext(),
        }
    }
}

/// Keys understood by `get` and `set`, in display order.
pub const CONFIG_KEYS: &[&str] = &["storage-key", "export-filename", "import-extensions"];

impl GarageConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GarageError::Io)?;
        let config: GarageConfig =
            serde_json::from_str(&content).map_err(GarageError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GarageError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GarageError::Serialization)?;
        fs::write(config_path, content).map_err(GarageError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "export-filename" => Some(self.export_filename.clone()),
            "import-extensions" => Some(self.import_extensions.join(",")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "storage-key" => {
                validate_storage_key(value)?;
                self.storage_key = value.to_string();
            }
            "export-filename" => {
                if value.is_empty() {
                    return Err(GarageError::Api("export-filename cannot be empty".into()));
                }
                self.export_filename = value.to_string();
            }
            "import-extensions" => self.set_import_extensions(value),
            other => return Err(GarageError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    /// Set accepted import extensions from a comma-separated list
    /// (normalizes each to start with a dot)
    pub fn set_import_extensions(&mut self, list: &str) {
        self.import_extensions = list
            .split(',')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();
    }
}

/// The catalog entry shares the data directory with `config.json`, so its key
/// must be a usable file stem other than the config file's own.
fn validate_storage_key(key: &str) -> Result<()> {
    validate_key(key).map_err(|_| {
        GarageError::Api(format!(
            "storage-key must be letters, digits, '-' or '_': {:?}",
            key
        ))
    })?;
    if key.eq_ignore_ascii_case(CONFIG_STEM) {
        return Err(GarageError::Api(format!(
            "storage-key {:?} is reserved for the config file",
            key
        )));
    }
    Ok(())
}
