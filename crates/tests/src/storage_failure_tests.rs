use shared_types::{GateDecision, SessionStore};

use crate::common::{self, FailingStorage, KEY, PASSWORD};

#[test]
fn test_failed_write_keeps_session_in_memory() {
    let mut store = SessionStore::with_demo_credentials(FailingStorage::default(), KEY);
    store.restore();

    let outcome = store.login("voyager@cruise.com", PASSWORD);

    assert!(outcome.succeeded());
    assert!(store.is_authenticated());
    assert_eq!(common::gate(&store), GateDecision::Render);
}

#[test]
fn test_logout_still_clears_with_failing_storage() {
    let mut store = SessionStore::with_demo_credentials(FailingStorage::default(), KEY);
    store.restore();
    store.login("voyager@cruise.com", PASSWORD);

    store.logout();

    assert!(!store.is_authenticated());
    assert_eq!(store.storage().removals, 1);
}

#[test]
fn test_failed_write_is_not_restored_after_restart() {
    let mut store = SessionStore::with_demo_credentials(FailingStorage::default(), KEY);
    store.restore();
    store.login("voyager@cruise.com", PASSWORD);

    let mut restarted = SessionStore::with_demo_credentials(store.into_storage(), KEY);
    assert!(restarted.restore().is_none());
}
