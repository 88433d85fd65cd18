use crate::tests::KEY;
use crate::{MemoryStorage, SessionStorage};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_clone_when_written_then_visible_through_original() {
    let storage = MemoryStorage::new();
    let clone = storage.clone();

    clone.write(KEY, "value").unwrap();

    assert_that!(storage.read(KEY).unwrap(), eq(&Some("value".to_string())));
}

#[test]
fn given_missing_key_when_remove_then_ok() {
    let storage = MemoryStorage::new();

    assert!(storage.remove(KEY).is_ok());
    assert!(storage.is_empty());
}

#[test]
fn given_value_when_quarantine_then_dropped() {
    let storage = MemoryStorage::new();
    storage.write(KEY, "garbage").unwrap();

    storage.quarantine(KEY).unwrap();

    assert!(!storage.contains_key(KEY));
}
