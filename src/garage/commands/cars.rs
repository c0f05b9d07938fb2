use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_cars, DisplayCar, DisplayIndex};
use crate::photo::encode_image_file;
use crate::store::{CatalogStore, StorageBackend};
use std::path::Path;

/// Current car list of a save file, numbered for display.
pub fn listing<B: StorageBackend>(
    store: &CatalogStore<B>,
    save_file: &str,
) -> Result<Vec<DisplayCar>> {
    Ok(index_cars(save_file, store.cars(save_file)?))
}

pub fn list<B: StorageBackend>(store: &CatalogStore<B>, save_file: &str) -> Result<CmdResult> {
    let cars = listing(store, save_file)?;
    Ok(CmdResult::default().with_listed_cars(save_file, cars))
}

pub fn view<B: StorageBackend>(
    store: &CatalogStore<B>,
    save_file: &str,
    positions: &[usize],
) -> Result<CmdResult> {
    let mut cars = Vec::with_capacity(positions.len());
    for &position in positions {
        let car = store.car(save_file, position)?;
        cars.push(DisplayCar {
            save_file: save_file.to_string(),
            index: DisplayIndex::from_position(position),
            car: car.clone(),
        });
    }
    Ok(CmdResult::default().with_affected_cars(cars))
}

/// Adds a car, encoding `photo` first when one is given. A bad photo path fails
/// before the store is touched.
pub fn create<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    save_file: &str,
    name: &str,
    photo: Option<&Path>,
) -> Result<CmdResult> {
    let encoded = photo.map(encode_image_file).transpose()?;
    let (position, car) = store.create_car(save_file, name, encoded)?;

    let mut result = list(store, save_file)?;
    result.add_message(CmdMessage::success(format!(
        "Car added ({}): {}",
        DisplayIndex::from_position(position),
        car.name
    )));
    result.affected_cars.push(DisplayCar {
        save_file: save_file.to_string(),
        index: DisplayIndex::from_position(position),
        car,
    });
    Ok(result)
}

pub fn delete<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    save_file: &str,
    position: usize,
) -> Result<CmdResult> {
    let car = store.delete_car(save_file, position)?;

    let mut result = list(store, save_file)?;
    result.add_message(CmdMessage::success(format!(
        "Car deleted ({}): {}",
        DisplayIndex::from_position(position),
        car.name
    )));
    Ok(result)
}
