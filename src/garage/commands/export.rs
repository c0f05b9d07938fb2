use crate::commands::{CmdMessage, CmdResult};
use crate::config::GarageConfig;
use crate::error::{GarageError, Result};
use crate::store::{CatalogStore, StorageBackend};
use std::fs;
use std::path::{Path, PathBuf};

/// Where `export` writes when no explicit path is given: the configured fixed
/// filename inside `dir`.
pub fn default_path(config: &GarageConfig, dir: &Path) -> PathBuf {
    dir.join(&config.export_filename)
}

/// Writes the whole catalog as a pretty-printed JSON document.
pub fn run<B: StorageBackend>(store: &CatalogStore<B>, output: &Path) -> Result<CmdResult> {
    let snapshot = store.export_snapshot()?;
    fs::write(output, &snapshot).map_err(GarageError::Io)?;

    let save_files = store.catalog().len();
    let cars: usize = store.catalog().values().map(Vec::len).sum();

    let mut result = CmdResult::default().with_paths(vec![output.to_path_buf()]);
    result.add_message(CmdMessage::success(format!(
        "Exported {} save {} ({} {}) to {}",
        save_files,
        if save_files == 1 { "file" } else { "files" },
        cars,
        if cars == 1 { "car" } else { "cars" },
        output.display()
    )));
    Ok(result)
}
