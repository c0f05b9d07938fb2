use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn garage_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("garage").unwrap();
    cmd.env("GARAGE_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_catalog_workflow() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    // 1. Empty start
    garage_cmd(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No save files yet."));

    // 2. Save file + car + detail
    garage_cmd(home)
        .args(["new", "Garage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Save file created: Garage"));

    garage_cmd(home)
        .args(["car", "add", "Garage", "ETK", "I-Series", "2400i"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Car added (1): ETK I-Series 2400i"))
        .stdout(predicate::str::contains("No details added."));

    garage_cmd(home)
        .args(["detail", "add", "Garage", "1", "  Turbo kit "])
        .assert()
        .success()
        .stdout(predicate::str::contains("1) Turbo kit"));

    // 3. Persisted snapshot matches what was typed, trimmed
    let raw = fs::read_to_string(home.join("saveFiles.json")).unwrap();
    assert_eq!(
        raw,
        r#"{"Garage":[{"name":"ETK I-Series 2400i","details":["Turbo kit"]}]}"#
    );

    // 4. Listing
    garage_cmd(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Garage  1 car"));
}

#[test]
fn test_rejections_exit_nonzero_and_change_nothing() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    garage_cmd(home).args(["new", "Garage"]).assert().success();

    garage_cmd(home)
        .args(["new", "Garage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    garage_cmd(home)
        .args(["car", "add", "Garage", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name cannot be empty"));

    garage_cmd(home)
        .args(["car", "delete", "Garage", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Car 1 not found"));

    garage_cmd(home)
        .args(["detail", "add", "Nowhere", "1", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Save file not found: Nowhere"));

    let raw = fs::read_to_string(home.join("saveFiles.json")).unwrap();
    assert_eq!(raw, r#"{"Garage":[]}"#);
}

#[test]
fn test_delete_asks_for_confirmation() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    garage_cmd(home).args(["new", "Garage"]).assert().success();

    garage_cmd(home)
        .args(["remove", "Garage"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    garage_cmd(home)
        .args(["remove", "Garage"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Save file deleted: Garage"));

    garage_cmd(home)
        .args(["remove", "Garage", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Save file not found"));
}

#[test]
fn test_car_delete_shifts_indexes() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    garage_cmd(home).args(["new", "Garage"]).assert().success();
    for name in ["Covet", "Pessima", "Bolide"] {
        garage_cmd(home)
            .args(["car", "add", "Garage", name])
            .assert()
            .success();
    }

    garage_cmd(home)
        .args(["car", "delete", "Garage", "1", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Car deleted (1): Covet"))
        .stdout(predicate::str::contains("1. Pessima"))
        .stdout(predicate::str::contains("2. Bolide"));
}

#[test]
fn test_photo_intake_and_extraction() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let image = temp.path().join("covet.png");
    let bytes: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    fs::write(&image, bytes).unwrap();

    garage_cmd(&home).args(["new", "Garage"]).assert().success();
    garage_cmd(&home)
        .args(["car", "add", "Garage", "--photo"])
        .arg(&image)
        .arg("Covet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Covet  [photo]"));

    let raw = fs::read_to_string(home.join("saveFiles.json")).unwrap();
    assert!(raw.contains("\"photo\":\"data:image/png;base64,"));

    let out = temp.path().join("extracted.png");
    garage_cmd(&home)
        .args(["car", "extract-photo", "Garage", "1"])
        .arg(&out)
        .assert()
        .success();
    assert_eq!(fs::read(&out).unwrap(), bytes);

    garage_cmd(&home)
        .args(["car", "photo", "Garage", "1"])
        .arg(temp.path().join("notes.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file"));
}

#[test]
fn test_export_import_round_trip() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let work = temp.path().join("work");
    fs::create_dir_all(&work).unwrap();

    garage_cmd(&home).args(["new", "Garage"]).assert().success();
    garage_cmd(&home)
        .args(["car", "add", "Garage", "Covet"])
        .assert()
        .success();
    garage_cmd(&home)
        .args(["detail", "add", "Garage", "1", "Stock"])
        .assert()
        .success();

    // Default export path is the fixed filename in the current directory.
    garage_cmd(&home)
        .current_dir(&work)
        .arg("export")
        .assert()
        .success();
    let exported = work.join("saveData.json");
    let document = fs::read_to_string(&exported).unwrap();
    assert!(document.contains("\n  \"Garage\": [\n"));

    // Wipe, then restore from the export.
    garage_cmd(&home)
        .args(["remove", "Garage", "--yes"])
        .assert()
        .success();
    garage_cmd(&home)
        .arg("import")
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data loaded"));

    garage_cmd(&home)
        .args(["show", "Garage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Covet"))
        .stdout(predicate::str::contains("1) Stock"));
}

#[test]
fn test_import_rejects_bad_input() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");

    garage_cmd(&home).args(["new", "Garage"]).assert().success();
    let before = fs::read_to_string(home.join("saveFiles.json")).unwrap();

    let not_json_ext = temp.path().join("data.txt");
    fs::write(&not_json_ext, "{}").unwrap();
    garage_cmd(&home)
        .arg("import")
        .arg(&not_json_ext)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file"));

    let broken = temp.path().join("broken.json");
    fs::write(&broken, "{\"Garage\": [").unwrap();
    garage_cmd(&home)
        .arg("import")
        .arg(&broken)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid snapshot"));

    assert_eq!(
        fs::read_to_string(home.join("saveFiles.json")).unwrap(),
        before
    );
}

#[test]
fn test_config_roundtrip() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    garage_cmd(home)
        .args(["config", "export-filename", "backup.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export-filename set to backup.json"));

    garage_cmd(home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key = saveFiles"))
        .stdout(predicate::str::contains("export-filename = backup.json"));
}

#[test]
fn test_config_rejects_unusable_storage_keys() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    garage_cmd(home).args(["new", "Garage"]).assert().success();

    garage_cmd(home)
        .args(["config", "storage-key", "my cars"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("storage-key must be"));

    garage_cmd(home)
        .args(["config", "storage-key", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));

    garage_cmd(home)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));

    // The catalog is still reachable under the original key.
    garage_cmd(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Garage"));
    garage_cmd(home)
        .args(["config", "storage-key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saveFiles"));
}

#[test]
fn test_config_repairs_a_broken_storage_key() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    garage_cmd(home).args(["new", "Garage"]).assert().success();
    fs::write(home.join("config.json"), r#"{"storage_key": "my cars"}"#).unwrap();

    garage_cmd(home).arg("list").assert().failure();

    garage_cmd(home)
        .args(["config", "storage-key", "saveFiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key set to saveFiles"));

    garage_cmd(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Garage"));
}
