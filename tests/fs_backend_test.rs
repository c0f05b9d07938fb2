use garage::error::GarageError;
use garage::store::backend::StorageBackend;
use garage::store::fs_backend::FsBackend;
use garage::store::{CatalogStore, DEFAULT_STORAGE_KEY};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Absent
    assert_eq!(backend.read("saveFiles").unwrap(), None);

    // 2. Write + read
    backend.write("saveFiles", "{\"Garage\":[]}").unwrap();
    assert_eq!(
        backend.read("saveFiles").unwrap(),
        Some("{\"Garage\":[]}".to_string())
    );

    // 3. Overwrite
    backend.write("saveFiles", "{}").unwrap();
    assert_eq!(backend.read("saveFiles").unwrap(), Some("{}".to_string()));
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    backend.write("saveFiles", "{}").unwrap();
    assert!(root.join("saveFiles.json").exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.write("saveFiles", "{}").unwrap();

    let on_disk = fs::read_to_string(dir.path().join("saveFiles.json")).unwrap();
    assert_eq!(on_disk, "{}");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    let err = backend.write("../outside", "{}").unwrap_err();
    assert!(matches!(err, GarageError::Store(_)));
    assert!(backend.read("a/b").is_err());
}

#[test]
fn test_store_persists_compact_json_on_disk() {
    let (dir, backend) = setup();
    let mut store = CatalogStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();
    store.create_save_file("Garage").unwrap();
    store.create_car("Garage", "ETK I-Series 2400i", None).unwrap();
    store.add_car_detail("Garage", 0, "  Turbo kit ").unwrap();

    let on_disk = fs::read_to_string(dir.path().join("saveFiles.json")).unwrap();
    assert_eq!(
        on_disk,
        r#"{"Garage":[{"name":"ETK I-Series 2400i","details":["Turbo kit"]}]}"#
    );
    assert_eq!(on_disk, serde_json::to_string(store.catalog()).unwrap());
}

#[test]
fn test_store_reopens_from_disk() {
    let (dir, backend) = setup();
    {
        let mut store = CatalogStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();
        store.create_save_file("Garage").unwrap();
        store.create_save_file("Track").unwrap();
        store.create_car("Track", "Bolide", None).unwrap();
        store.delete_save_file("Garage").unwrap();
    }

    let reopened = CatalogStore::open(
        FsBackend::new(dir.path().to_path_buf()),
        DEFAULT_STORAGE_KEY,
    )
    .unwrap();
    assert_eq!(reopened.list_save_files(), vec!["Track"]);
    assert_eq!(reopened.car("Track", 0).unwrap().name, "Bolide");
}
