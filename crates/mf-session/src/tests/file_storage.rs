use crate::tests::{KEY, backup_count};
use crate::{FileStorage, SessionStorage, StorageError, validate_key};

use googletest::assert_that;
use googletest::prelude::eq;
use tempfile::TempDir;

fn storage() -> (TempDir, FileStorage) {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path().join("session"));
    (temp, storage)
}

#[test]
fn given_missing_directory_when_write_then_creates_it() {
    let (_temp, storage) = storage();

    storage.write(KEY, "{}").unwrap();

    assert!(storage.dir().is_dir());
    assert_that!(storage.read(KEY).unwrap(), eq(&Some("{}".to_string())));
}

#[test]
fn given_no_file_when_read_then_none() {
    let (_temp, storage) = storage();

    assert!(storage.read(KEY).unwrap().is_none());
}

#[test]
fn given_existing_value_when_write_then_replaced_without_temp_leftovers() {
    let (_temp, storage) = storage();
    storage.write(KEY, "first").unwrap();

    storage.write(KEY, "second").unwrap();

    assert_that!(storage.read(KEY).unwrap(), eq(&Some("second".to_string())));
    let leftovers = std::fs::read_dir(storage.dir())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
        .count();
    assert_that!(leftovers, eq(0));
}

#[test]
fn given_value_when_remove_twice_then_both_ok() {
    let (_temp, storage) = storage();
    storage.write(KEY, "value").unwrap();

    storage.remove(KEY).unwrap();
    storage.remove(KEY).unwrap();

    assert!(!storage.path_for(KEY).unwrap().exists());
}

#[test]
fn given_corrupted_file_when_quarantine_then_backup_created() {
    let (_temp, storage) = storage();
    storage.write(KEY, "{broken").unwrap();

    storage.quarantine(KEY).unwrap();

    assert!(storage.read(KEY).unwrap().is_none());
    assert_that!(backup_count(storage.dir()), eq(1));
}

#[test]
fn given_two_quarantines_back_to_back_when_listing_then_both_backups_kept() {
    let (_temp, storage) = storage();

    storage.write(KEY, "{first").unwrap();
    storage.quarantine(KEY).unwrap();
    storage.write(KEY, "{second").unwrap();
    storage.quarantine(KEY).unwrap();

    assert_that!(backup_count(storage.dir()), eq(2));
}

#[test]
fn given_non_utf8_file_when_read_then_corrupted() {
    let (_temp, storage) = storage();
    std::fs::create_dir_all(storage.dir()).unwrap();
    std::fs::write(storage.path_for(KEY).unwrap(), [0xff, 0xfe]).unwrap();

    let result = storage.read(KEY);

    assert!(matches!(result, Err(StorageError::Corrupted { .. })));
}

#[test]
fn given_no_file_when_quarantine_then_ok() {
    let (_temp, storage) = storage();

    assert!(storage.quarantine(KEY).is_ok());
}

#[test]
fn given_path_traversal_key_when_write_then_invalid_key() {
    let (_temp, storage) = storage();

    let result = storage.write("../escape", "value");

    assert!(matches!(result, Err(StorageError::InvalidKey { .. })));
}

#[test]
fn test_validate_key() {
    assert!(validate_key("mefit_user").is_ok());
    assert!(validate_key("session-v2.backup").is_ok());
    assert!(validate_key("").is_err());
    assert!(validate_key(".hidden").is_err());
    assert!(validate_key("a/b").is_err());
    assert!(validate_key("with space").is_err());
}
