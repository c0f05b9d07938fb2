use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GarageError, Result};
use crate::store::{CatalogStore, StorageBackend};
use std::fs;
use std::path::Path;

/// True when `path` ends in one of `import_exts` (each given with its leading dot).
pub fn has_import_extension(path: &Path, import_exts: &[String]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext_str = format!(".{}", ext.to_string_lossy());
            import_exts.contains(&ext_str)
        }
        None => false,
    }
}

/// Replaces the whole catalog with the document at `path`.
///
/// Files without an accepted extension are rejected without being opened. A
/// document that does not parse leaves the catalog exactly as it was.
pub fn run<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    path: &Path,
    import_exts: &[String],
) -> Result<CmdResult> {
    if !has_import_extension(path, import_exts) {
        return Err(GarageError::UnsupportedFile(format!(
            "{} (expected one of: {})",
            path.display(),
            import_exts.join(", ")
        )));
    }

    let content = fs::read(path).map_err(GarageError::Io)?;
    store.import_snapshot(&content)?;

    let save_files = store.catalog().len();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data loaded from {}: {} save {}",
        path.display(),
        save_files,
        if save_files == 1 { "file" } else { "files" }
    )));
    Ok(result)
}
