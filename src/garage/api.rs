//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for all garage operations, regardless of the UI being used.
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: car and detail indexes arrive as the 1-based strings a
//!   person typed (`"1"`, `"2"`) and leave as 0-based store positions
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no terminal I/O.
//!
//! `GarageApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `GarageApi<FsBackend>`
//! - Testing: `GarageApi<MemBackend>`

use crate::commands;
use crate::error::{GarageError, Result};
use crate::index::DisplayIndex;
use crate::store::{CatalogStore, StorageBackend};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The main API facade for garage operations.
pub struct GarageApi<B: StorageBackend> {
    store: CatalogStore<B>,
    data_dir: PathBuf,
}

impl<B: StorageBackend> GarageApi<B> {
    pub fn new(store: CatalogStore<B>, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn store(&self) -> &CatalogStore<B> {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn list_save_files(&self) -> Result<commands::CmdResult> {
        commands::save_files::list(&self.store)
    }

    pub fn create_save_file(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::save_files::create(&mut self.store, name)
    }

    pub fn delete_save_file(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::save_files::delete(&mut self.store, name)
    }

    pub fn list_cars(&self, save_file: &str) -> Result<commands::CmdResult> {
        commands::cars::list(&self.store, save_file)
    }

    pub fn view_cars<I: AsRef<str>>(
        &self,
        save_file: &str,
        cars: &[I],
    ) -> Result<commands::CmdResult> {
        let positions = parse_positions(cars)?;
        commands::cars::view(&self.store, save_file, &positions)
    }

    pub fn create_car(
        &mut self,
        save_file: &str,
        name: &str,
        photo: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        commands::cars::create(&mut self.store, save_file, name, photo)
    }

    pub fn delete_car(&mut self, save_file: &str, car: &str) -> Result<commands::CmdResult> {
        let car = parse_position(car)?;
        commands::cars::delete(&mut self.store, save_file, car)
    }

    pub fn set_car_photo(
        &mut self,
        save_file: &str,
        car: &str,
        image: &Path,
    ) -> Result<commands::CmdResult> {
        let car = parse_position(car)?;
        commands::photos::set(&mut self.store, save_file, car, image)
    }

    pub fn extract_car_photo(
        &self,
        save_file: &str,
        car: &str,
        out: &Path,
    ) -> Result<commands::CmdResult> {
        let car = parse_position(car)?;
        commands::photos::extract(&self.store, save_file, car, out)
    }

    pub fn add_car_detail(
        &mut self,
        save_file: &str,
        car: &str,
        text: &str,
    ) -> Result<commands::CmdResult> {
        let car = parse_position(car)?;
        commands::details::add(&mut self.store, save_file, car, text)
    }

    pub fn edit_car_detail(
        &mut self,
        save_file: &str,
        car: &str,
        detail: &str,
        text: &str,
    ) -> Result<commands::CmdResult> {
        let car = parse_position(car)?;
        let detail = parse_position(detail)?;
        commands::details::edit(&mut self.store, save_file, car, detail, text)
    }

    pub fn delete_car_detail(
        &mut self,
        save_file: &str,
        car: &str,
        detail: &str,
    ) -> Result<commands::CmdResult> {
        let car = parse_position(car)?;
        let detail = parse_position(detail)?;
        commands::details::delete(&mut self.store, save_file, car, detail)
    }

    pub fn export(&self, output: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, output)
    }

    pub fn import(&mut self, path: &Path, import_exts: &[String]) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path, import_exts)
    }
}

/// Reads or changes the configuration in `data_dir`.
///
/// Takes no store: a configuration that cannot open the catalog must still be
/// repairable from here.
pub fn configure(data_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(data_dir, action)
}

fn parse_position(input: &str) -> Result<usize> {
    DisplayIndex::from_str(input)
        .map(DisplayIndex::position)
        .map_err(GarageError::Api)
}

fn parse_positions<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<usize>> {
    inputs.iter().map(|s| parse_position(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SaveFileSummary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use crate::store::mem_backend::MemBackend;

    fn api(fixture: StoreFixture) -> GarageApi<MemBackend> {
        GarageApi::new(fixture.store, PathBuf::from("memory://garage"))
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1").unwrap(), 0);
        assert_eq!(parse_position("3").unwrap(), 2);
        assert!(matches!(parse_position("0"), Err(GarageError::Api(_))));
        assert!(matches!(parse_position("two"), Err(GarageError::Api(_))));
    }

    #[test]
    fn test_indexes_are_one_based() {
        let mut api = api(
            StoreFixture::new()
                .with_save_file("Garage")
                .with_cars("Garage", 2),
        );
        api.add_car_detail("Garage", "2", "Turbo kit").unwrap();
        assert_eq!(
            api.store().car("Garage", 1).unwrap().details,
            vec!["Turbo kit"]
        );

        api.delete_car("Garage", "1").unwrap();
        assert_eq!(api.store().car("Garage", 0).unwrap().name, "Car 2");
    }

    #[test]
    fn test_bad_index_dispatches_nothing() {
        let mut api = api(
            StoreFixture::new()
                .with_save_file("Garage")
                .with_cars("Garage", 1),
        );
        assert!(api.delete_car("Garage", "0").is_err());
        assert!(api.edit_car_detail("Garage", "1", "x", "text").is_err());
        assert_eq!(api.store().cars("Garage").unwrap().len(), 1);
    }

    #[test]
    fn test_view_cars() {
        let api = api(
            StoreFixture::new()
                .with_save_file("Garage")
                .with_cars("Garage", 3),
        );
        let result = api.view_cars("Garage", &["3", "1"]).unwrap();
        let names: Vec<&str> = result
            .affected_cars
            .iter()
            .map(|dc| dc.car.name.as_str())
            .collect();
        assert_eq!(names, vec!["Car 3", "Car 1"]);
    }
}
