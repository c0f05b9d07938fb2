use crate::commands::cars::list;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GarageError, Result};
use crate::index::DisplayIndex;
use crate::photo::{decode_data_url, encode_image_file, extension_for_mime};
use crate::store::{CatalogStore, StorageBackend};
use std::fs;
use std::path::{Path, PathBuf};

/// Replaces a car's photo with the image at `image`.
pub fn set<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    save_file: &str,
    position: usize,
    image: &Path,
) -> Result<CmdResult> {
    // Resolve the car first so a bad index is reported before any file I/O.
    store.car(save_file, position)?;
    let encoded = encode_image_file(image)?;
    store.set_car_photo(save_file, position, encoded)?;

    let car_name = store.car(save_file, position)?.name.clone();
    let mut result = list(store, save_file)?;
    result.add_message(CmdMessage::success(format!(
        "Photo updated ({}): {}",
        DisplayIndex::from_position(position),
        car_name
    )));
    Ok(result)
}

/// Writes a car's stored photo to `out` as a plain image file.
///
/// If `out` is a directory the file is named after the car, with an extension
/// matching the stored image type.
pub fn extract<B: StorageBackend>(
    store: &CatalogStore<B>,
    save_file: &str,
    position: usize,
    out: &Path,
) -> Result<CmdResult> {
    let car = store.car(save_file, position)?;
    let photo = car
        .photo
        .as_deref()
        .ok_or_else(|| GarageError::Api(format!("Car \"{}\" has no photo", car.name)))?;
    let image = decode_data_url(photo)?;

    let target: PathBuf = if out.is_dir() {
        let ext = extension_for_mime(&image.mime).unwrap_or("img");
        out.join(format!("{}.{}", sanitize_filename(&car.name), ext))
    } else {
        out.to_path_buf()
    };
    fs::write(&target, &image.bytes).map_err(GarageError::Io)?;

    let mut result = CmdResult::default().with_paths(vec![target.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Photo written to {}",
        target.display()
    )));
    Ok(result)
}

fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "car".to_string()
    } else {
        cleaned.to_string()
    }
}
