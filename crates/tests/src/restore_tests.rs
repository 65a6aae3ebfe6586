use pretty_assertions::assert_eq;
use shared_types::{MemoryStorage, SessionStore};

use crate::common::{self, KEY, PASSWORD};

#[test]
fn test_session_survives_restart() {
    let mut store = common::resolved_store();
    store.login("voyager@cruise.com", PASSWORD);
    let before = store.current_identity().cloned();

    let mut restarted = common::restart(store);
    assert!(!restarted.is_resolved());
    let restored = restarted.restore().cloned();

    assert_eq!(restored, before);
    assert!(restarted.is_resolved());
    assert!(restarted.is_authenticated());
}

#[test]
fn test_empty_storage_restores_nothing() {
    let mut store = common::fresh_store();
    assert!(store.restore().is_none());
    assert!(store.is_resolved());
}

#[test]
fn test_corrupt_record_is_discarded() {
    let storage = MemoryStorage::with_record(KEY, "{not json");
    let mut store = SessionStore::with_demo_credentials(storage, KEY);

    assert!(store.restore().is_none());
    assert!(store.is_resolved());
    assert!(!store.storage().contains(KEY));
}

#[test]
fn test_record_missing_fields_is_discarded() {
    let storage = MemoryStorage::with_record(KEY, r#"{"id":"1","name":"John Voyager"}"#);
    let mut store = SessionStore::with_demo_credentials(storage, KEY);

    assert!(store.restore().is_none());
}

#[test]
fn test_record_from_previous_run_is_trusted() {
    let identity = common::voyager();
    let storage = MemoryStorage::with_record(KEY, common::record_for(&identity));
    let mut store = SessionStore::with_demo_credentials(storage, KEY);

    assert_eq!(store.restore(), Some(&identity));
}

#[test]
fn test_other_keys_are_ignored() {
    let identity = common::voyager();
    let storage = MemoryStorage::with_record("someone_else", common::record_for(&identity));
    let mut store = SessionStore::with_demo_credentials(storage, KEY);

    assert!(store.restore().is_none());
}
