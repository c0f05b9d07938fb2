//! # Storage Layer
//!
//! [`CatalogStore`] owns the save-file mapping and is the only thing allowed to
//! change it. Persistence goes through the [`StorageBackend`] trait, a plain named-entry
//! key-value interface, so the store can run against disk or memory unchanged.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production storage
//!   - One JSON file per entry: `<data dir>/<key>.json`
//!   - Atomic writes (tmp file + rename)
//!
//! - [`mem_backend::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── saveFiles.json      # The whole catalog, compact JSON
//! └── config.json         # Configuration
//! ```

pub mod backend;
pub mod catalog;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use catalog::CatalogStore;

/// Name of the entry the catalog lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "saveFiles";

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use super::{CatalogStore, DEFAULT_STORAGE_KEY};

    /// Builds a populated in-memory store for tests.
    pub struct StoreFixture {
        pub store: CatalogStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: CatalogStore::open(MemBackend::new(), DEFAULT_STORAGE_KEY)
                    .expect("empty memory backend always opens"),
            }
        }

        pub fn with_save_file(mut self, name: &str) -> Self {
            self.store.create_save_file(name).unwrap();
            self
        }

        pub fn with_car(mut self, save_file: &str, name: &str) -> Self {
            self.store.create_car(save_file, name, None).unwrap();
            self
        }

        pub fn with_cars(mut self, save_file: &str, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .create_car(save_file, &format!("Car {}", i + 1), None)
                    .unwrap();
            }
            self
        }

        pub fn with_detail(mut self, save_file: &str, car: usize, text: &str) -> Self {
            self.store.add_car_detail(save_file, car, text).unwrap();
            self
        }

        pub fn with_photo(mut self, save_file: &str, car: usize, photo: &str) -> Self {
            self.store
                .set_car_photo(save_file, car, photo.to_string())
                .unwrap();
            self
        }
    }
}
