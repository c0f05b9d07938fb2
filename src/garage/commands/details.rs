use crate::commands::cars::list;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{CatalogStore, StorageBackend};

pub fn add<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    save_file: &str,
    car: usize,
    text: &str,
) -> Result<CmdResult> {
    let at = store.add_car_detail(save_file, car, text)?;
    let stored = store.car(save_file, car)?.details[at].clone();

    let mut result = list(store, save_file)?;
    result.add_message(CmdMessage::success(format!(
        "Detail added ({}.{}): {}",
        DisplayIndex::from_position(car),
        DisplayIndex::from_position(at),
        stored
    )));
    Ok(result)
}

pub fn edit<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    save_file: &str,
    car: usize,
    detail: usize,
    text: &str,
) -> Result<CmdResult> {
    let previous = store.edit_car_detail(save_file, car, detail, text)?;
    let stored = store.car(save_file, car)?.details[detail].clone();

    let mut result = list(store, save_file)?;
    result.add_message(CmdMessage::success(format!(
        "Detail updated ({}.{}): {} -> {}",
        DisplayIndex::from_position(car),
        DisplayIndex::from_position(detail),
        previous,
        stored
    )));
    Ok(result)
}

pub fn delete<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    save_file: &str,
    car: usize,
    detail: usize,
) -> Result<CmdResult> {
    let removed = store.delete_car_detail(save_file, car, detail)?;

    let mut result = list(store, save_file)?;
    result.add_message(CmdMessage::success(format!(
        "Detail deleted ({}.{}): {}",
        DisplayIndex::from_position(car),
        DisplayIndex::from_position(detail),
        removed
    )));
    Ok(result)
}
