use shared_types::{GateDecision, MemoryStorage};
use tokio::sync::oneshot;

use crate::common::{self, KEY, PASSWORD};

#[test]
fn test_unresolved_store_waits() {
    let store = common::fresh_store();
    assert_eq!(common::gate(&store), GateDecision::Waiting);
}

#[test]
fn test_resolved_without_session_redirects() {
    let store = common::resolved_store();
    assert_eq!(common::gate(&store), GateDecision::RedirectToLogin);
}

#[test]
fn test_login_unlocks_gate() {
    let mut store = common::resolved_store();
    store.login("cook@cruise.com", PASSWORD);
    assert_eq!(common::gate(&store), GateDecision::Render);
}

#[test]
fn test_logout_locks_gate() {
    let mut store = common::resolved_store();
    store.login("cook@cruise.com", PASSWORD);
    store.logout();
    assert_eq!(common::gate(&store), GateDecision::RedirectToLogin);
}

#[tokio::test]
async fn test_gate_waits_until_delayed_restore_resolves() {
    let store = common::shared_fresh_store();
    let (tx, rx) = oneshot::channel();
    let pending = tokio::spawn(common::restore_when_ready(store.clone(), rx));

    for _ in 0..5 {
        tokio::task::yield_now().await;
        assert_eq!(common::gate(&*store.lock().await), GateDecision::Waiting);
        assert!(!pending.is_finished());
    }

    let record = common::record_for(&common::voyager());
    tx.send(MemoryStorage::with_record(KEY, record)).unwrap();
    pending.await.unwrap();

    let store = store.lock().await;
    assert_eq!(common::gate(&*store), GateDecision::Render);
    assert_eq!(store.current_identity(), Some(&common::voyager()));
}

#[tokio::test]
async fn test_delayed_restore_without_record_redirects() {
    let store = common::shared_fresh_store();
    let (tx, rx) = oneshot::channel();
    let pending = tokio::spawn(common::restore_when_ready(store.clone(), rx));

    tx.send(MemoryStorage::new()).unwrap();
    pending.await.unwrap();

    assert_eq!(common::gate(&*store.lock().await), GateDecision::RedirectToLogin);
}

#[tokio::test]
async fn test_login_during_delayed_restore_is_kept() {
    let store = common::shared_fresh_store();
    let (tx, rx) = oneshot::channel();
    let pending = tokio::spawn(common::restore_when_ready(store.clone(), rx));

    let outcome = store.lock().await.login("admin@cruise.com", PASSWORD);
    assert!(outcome.succeeded());
    assert_eq!(common::gate(&*store.lock().await), GateDecision::Waiting);

    tx.send(MemoryStorage::new()).unwrap();
    pending.await.unwrap();

    let store = store.lock().await;
    assert_eq!(common::gate(&*store), GateDecision::Render);
    assert!(store.storage().contains(KEY));
}
