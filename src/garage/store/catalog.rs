use super::backend::StorageBackend;
use crate::error::{GarageError, Result};
use crate::model::{normalize_text, Car, Catalog};
use tracing::{debug, warn};

/// Sole owner of the save-file mapping.
///
/// Every mutating method is a transaction: it runs against a copy of the catalog,
/// the copy is serialized and written through the backend, and only after the write
/// succeeds does the copy replace the live catalog. Any error along the way leaves
/// both the in-memory catalog and the persisted entry as they were.
pub struct CatalogStore<B: StorageBackend> {
    backend: B,
    key: String,
    catalog: Catalog,
}

impl<B: StorageBackend> CatalogStore<B> {
    /// Loads the catalog from `key`, or starts empty if the entry does not exist.
    pub fn open(backend: B, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let catalog = match backend.read(&key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(GarageError::Serialization)?,
            None => Catalog::new(),
        };
        debug!(key = %key, save_files = catalog.len(), "opened catalog");
        Ok(Self {
            backend,
            key,
            catalog,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Save-file names in insertion order.
    pub fn list_save_files(&self) -> Vec<&str> {
        self.catalog.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, save_file: &str) -> bool {
        self.catalog.contains_key(save_file)
    }

    pub fn cars(&self, save_file: &str) -> Result<&[Car]> {
        self.catalog
            .get(save_file)
            .map(Vec::as_slice)
            .ok_or_else(|| GarageError::SaveFileNotFound(save_file.to_string()))
    }

    pub fn car(&self, save_file: &str, position: usize) -> Result<&Car> {
        self.cars(save_file)?
            .get(position)
            .ok_or_else(|| GarageError::CarNotFound {
                save_file: save_file.to_string(),
                position,
            })
    }

    /// Names are case-sensitive and kept exactly as given; only an empty or
    /// whitespace-only name is rejected.
    pub fn create_save_file(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(GarageError::InvalidName);
        }
        if self.catalog.contains_key(name) {
            return Err(GarageError::DuplicateName(name.to_string()));
        }
        self.transact(|catalog| {
            catalog.insert(name.to_string(), Vec::new());
            Ok(())
        })
    }

    /// Removes the save file and every car in it. Other save files keep their order.
    pub fn delete_save_file(&mut self, name: &str) -> Result<Vec<Car>> {
        if !self.catalog.contains_key(name) {
            return Err(GarageError::SaveFileNotFound(name.to_string()));
        }
        self.transact(|catalog| {
            catalog
                .shift_remove(name)
                .ok_or_else(|| GarageError::SaveFileNotFound(name.to_string()))
        })
    }

    /// Appends a car and returns its position along with the stored record.
    pub fn create_car(
        &mut self,
        save_file: &str,
        car_name: &str,
        photo: Option<String>,
    ) -> Result<(usize, Car)> {
        self.transact(|catalog| {
            let cars = cars_mut(catalog, save_file)?;
            let name = normalize_text(car_name).ok_or(GarageError::InvalidName)?;
            let car = Car {
                name,
                photo,
                details: Vec::new(),
            };
            cars.push(car.clone());
            Ok((cars.len() - 1, car))
        })
    }

    /// Replaces the photo unconditionally.
    pub fn set_car_photo(&mut self, save_file: &str, car: usize, encoded: String) -> Result<()> {
        self.transact(|catalog| {
            car_mut(catalog, save_file, car)?.photo = Some(encoded);
            Ok(())
        })
    }

    /// Appends trimmed `text` and returns its position in the detail list.
    pub fn add_car_detail(&mut self, save_file: &str, car: usize, text: &str) -> Result<usize> {
        self.transact(|catalog| {
            let car = car_mut(catalog, save_file, car)?;
            let detail = normalize_text(text).ok_or(GarageError::InvalidDetail)?;
            car.details.push(detail);
            Ok(car.details.len() - 1)
        })
    }

    /// Replaces a detail in place, returning the previous text.
    pub fn edit_car_detail(
        &mut self,
        save_file: &str,
        car: usize,
        detail: usize,
        text: &str,
    ) -> Result<String> {
        self.transact(|catalog| {
            let car = car_mut(catalog, save_file, car)?;
            let slot = detail_mut(car, detail)?;
            let replacement = normalize_text(text).ok_or(GarageError::InvalidDetail)?;
            Ok(std::mem::replace(slot, replacement))
        })
    }

    /// Removes a detail; later details shift down by one.
    pub fn delete_car_detail(&mut self, save_file: &str, car: usize, detail: usize) -> Result<String> {
        self.transact(|catalog| {
            let car = car_mut(catalog, save_file, car)?;
            detail_mut(car, detail)?;
            Ok(car.details.remove(detail))
        })
    }

    /// Removes a car; later cars shift down by one.
    pub fn delete_car(&mut self, save_file: &str, car: usize) -> Result<Car> {
        self.transact(|catalog| {
            car_mut(catalog, save_file, car)?;
            Ok(cars_mut(catalog, save_file)?.remove(car))
        })
    }

    /// The whole catalog as pretty-printed JSON.
    pub fn export_snapshot(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(&self.catalog).map_err(GarageError::Serialization)
    }

    /// Replaces the whole catalog with the document in `bytes`.
    ///
    /// The document is fully parsed before anything is touched; a malformed one
    /// is reported as [`GarageError::Parse`] and the store stays as it was.
    pub fn import_snapshot(&mut self, bytes: &[u8]) -> Result<()> {
        let next: Catalog = match serde_json::from_slice(bytes) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "rejected snapshot import");
                return Err(GarageError::Parse(e));
            }
        };
        self.commit(next)
    }

    fn transact<T>(&mut self, op: impl FnOnce(&mut Catalog) -> Result<T>) -> Result<T> {
        let mut next = self.catalog.clone();
        let out = op(&mut next)?;
        self.commit(next)?;
        Ok(out)
    }

    fn commit(&mut self, next: Catalog) -> Result<()> {
        let raw = serde_json::to_string(&next).map_err(GarageError::Serialization)?;
        self.backend.write(&self.key, &raw)?;
        debug!(
            key = %self.key,
            bytes = raw.len(),
            save_files = next.len(),
            "committed catalog"
        );
        self.catalog = next;
        Ok(())
    }
}

fn cars_mut<'a>(catalog: &'a mut Catalog, save_file: &str) -> Result<&'a mut Vec<Car>> {
    catalog
        .get_mut(save_file)
        .ok_or_else(|| GarageError::SaveFileNotFound(save_file.to_string()))
}

fn car_mut<'a>(catalog: &'a mut Catalog, save_file: &str, position: usize) -> Result<&'a mut Car> {
    cars_mut(catalog, save_file)?
        .get_mut(position)
        .ok_or_else(|| GarageError::CarNotFound {
            save_file: save_file.to_string(),
            position,
        })
}

fn detail_mut(car: &mut Car, position: usize) -> Result<&mut String> {
    let name = car.name.clone();
    car.details
        .get_mut(position)
        .ok_or(GarageError::DetailNotFound {
            car: name,
            position,
        })
}
