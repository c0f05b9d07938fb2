use crate::api::GarageApi;
use crate::config::GarageConfig;
use crate::error::{GarageError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::CatalogStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform data directory when set.
pub const HOME_ENV: &str = "GARAGE_HOME";

pub struct GarageContext {
    pub api: GarageApi<FsBackend>,
    pub config: GarageConfig,
}

/// Resolve where the catalog and config live: `$GARAGE_HOME` if set and non-empty,
/// otherwise the platform data directory.
pub fn data_dir(home_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = home_override {
        if !dir.as_os_str().is_empty() {
            return Ok(dir.to_path_buf());
        }
    }
    let proj_dirs = ProjectDirs::from("com", "garage", "garage")
        .ok_or_else(|| GarageError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Load config, open the catalog and wire up the API for `dir`.
pub fn initialize_at(dir: PathBuf) -> Result<GarageContext> {
    let config = GarageConfig::load(&dir)?;
    let backend = FsBackend::new(dir.clone());
    let store = CatalogStore::open(backend, config.storage_key.clone())?;
    let api = GarageApi::new(store, dir);
    Ok(GarageContext { api, config })
}

/// The data directory for this process, honoring `$GARAGE_HOME`.
pub fn resolve_data_dir() -> Result<PathBuf> {
    let home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    data_dir(home.as_deref())
}

pub fn initialize() -> Result<GarageContext> {
    initialize_at(resolve_data_dir()?)
}
