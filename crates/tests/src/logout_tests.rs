use shared_types::{Notice, NoticeTone};

use crate::common::{self, KEY, PASSWORD};

#[test]
fn test_logout_clears_session_and_record() {
    let mut store = common::resolved_store();
    store.login("admin@cruise.com", PASSWORD);

    let notice = store.logout();

    assert!(store.current_identity().is_none());
    assert!(!store.storage().contains(KEY));
    assert_eq!(notice.title, "Logged Out");
    assert_eq!(notice.description, "You have been successfully logged out");
    assert_eq!(notice.tone, NoticeTone::Info);
}

#[test]
fn test_logout_without_session_is_harmless() {
    let mut store = common::resolved_store();

    assert_eq!(store.logout(), Notice::logged_out());
    assert_eq!(store.logout(), Notice::logged_out());
    assert!(!store.is_authenticated());
    assert!(store.is_resolved());
}

#[test]
fn test_restart_after_logout_has_no_session() {
    let mut store = common::resolved_store();
    store.login("voyager@cruise.com", PASSWORD);
    store.logout();

    let mut restarted = common::restart(store);
    assert!(restarted.restore().is_none());
}
