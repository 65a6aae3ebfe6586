use pretty_assertions::assert_eq;
use shared_types::{resolve_navigation, Notice, NoticeTone, Role, SessionStorage};

use crate::common::{self, KEY, PASSWORD};

#[test]
fn test_voyager_login_opens_session_and_menu() {
    let mut store = common::resolved_store();

    let outcome = store.login("voyager@cruise.com", PASSWORD);

    assert!(outcome.succeeded());
    let identity = store.current_identity().expect("session is active");
    assert_eq!(identity, &common::voyager());
    assert_eq!(identity.role(), Some(Role::Voyager));

    let labels: Vec<_> = resolve_navigation(&identity.role).iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            "Dashboard",
            "Catering",
            "Stationery",
            "Resort & Movies",
            "Beauty Salon",
            "Fitness Center",
            "Party Hall",
        ]
    );
}

#[test]
fn test_login_persists_record() {
    let mut store = common::resolved_store();
    store.login("voyager@cruise.com", PASSWORD);

    let raw = store.storage().load(KEY).expect("record written");
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["id"], "1");
    assert_eq!(stored["name"], "John Voyager");
    assert_eq!(stored["email"], "voyager@cruise.com");
    assert_eq!(stored["role"], "voyager");
}

#[test]
fn test_success_notice_greets_by_name() {
    let mut store = common::resolved_store();
    let notice = store.login("cook@cruise.com", PASSWORD).notice();

    assert_eq!(notice.title, "Login Successful");
    assert_eq!(notice.description, "Welcome back, Head Cook!");
    assert_eq!(notice.tone, NoticeTone::Success);
}

#[test]
fn test_unknown_email_is_rejected() {
    let mut store = common::resolved_store();

    let outcome = store.login("nobody@x.com", "whatever");

    assert!(!outcome.succeeded());
    assert_eq!(outcome.notice(), Notice::login_failed());
    assert_eq!(outcome.notice().tone, NoticeTone::Destructive);
    assert!(store.current_identity().is_none());
    assert!(!store.storage().contains(KEY));
}

#[test]
fn test_wrong_password_is_rejected() {
    let mut store = common::resolved_store();
    assert!(!store.login("admin@cruise.com", "password124").succeeded());
    assert!(!store.is_authenticated());
}

#[test]
fn test_email_match_is_exact() {
    let mut store = common::resolved_store();
    assert!(!store.login("Voyager@cruise.com", PASSWORD).succeeded());
    assert!(!store.login(" voyager@cruise.com", PASSWORD).succeeded());
    assert!(!store.login("", "").succeeded());
}

#[test]
fn test_failed_login_keeps_previous_session() {
    let mut store = common::resolved_store();
    store.login("manager@cruise.com", PASSWORD);

    store.login("manager@cruise.com", "nope");

    assert_eq!(
        store.current_identity().map(|i| i.email.as_str()),
        Some("manager@cruise.com")
    );
    assert!(store.storage().contains(KEY));
}

#[test]
fn test_second_login_replaces_session() {
    let mut store = common::resolved_store();
    store.login("voyager@cruise.com", PASSWORD);
    store.login("supervisor@cruise.com", PASSWORD);

    assert_eq!(
        store.current_identity().and_then(|i| i.role()),
        Some(Role::Supervisor)
    );
    let raw = store.storage().load(KEY).unwrap();
    assert!(raw.contains("supervisor@cruise.com"));
}

#[test]
fn test_every_demo_account_signs_in() {
    let accounts = [
        ("voyager@cruise.com", Role::Voyager),
        ("admin@cruise.com", Role::Admin),
        ("manager@cruise.com", Role::Manager),
        ("cook@cruise.com", Role::HeadCook),
        ("supervisor@cruise.com", Role::Supervisor),
    ];
    for (email, role) in accounts {
        let mut store = common::resolved_store();
        let outcome = store.login(email, PASSWORD);
        assert_eq!(outcome.identity().and_then(|i| i.role()), Some(role), "{email}");
    }
}
