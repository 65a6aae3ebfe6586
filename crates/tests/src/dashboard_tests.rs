use pretty_assertions::assert_eq;
use shared_types::{
    compose_dashboard, greeting, DashboardView, Role, ADMIN_ACTIONS, HEADCOOK_QUEUE,
    MANAGER_BOOKINGS, SUPERVISOR_QUEUE, VOYAGER_SERVICES,
};

use crate::common::{self, PASSWORD};

#[test]
fn test_signed_in_roles_get_matching_dashboards() {
    let expected = [
        ("voyager@cruise.com", DashboardView::Voyager),
        ("admin@cruise.com", DashboardView::Admin),
        ("manager@cruise.com", DashboardView::Manager),
        ("cook@cruise.com", DashboardView::HeadCook),
        ("supervisor@cruise.com", DashboardView::Supervisor),
    ];
    for (email, view) in expected {
        let mut store = common::resolved_store();
        store.login(email, PASSWORD);
        let identity = store.current_identity().unwrap();
        assert_eq!(compose_dashboard(&identity.role), view, "{email}");
    }
}

#[test]
fn test_unknown_role_gets_placeholder_view() {
    assert_eq!(
        compose_dashboard("steward"),
        DashboardView::UnknownRole("steward".to_string())
    );
}

#[test]
fn test_every_role_has_a_view() {
    for role in Role::ALL {
        assert_eq!(compose_dashboard(role.as_str()), DashboardView::from(role));
    }
}

#[test]
fn test_voyager_shortcuts() {
    let titles: Vec<_> = VOYAGER_SERVICES.iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        vec![
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
fn test_admin_shortcuts() {
    let paths: Vec<_> = ADMIN_ACTIONS.iter().map(|s| s.path).collect();
    assert_eq!(paths, vec!["/add-item", "/manage-items", "/register-voyager"]);
}

#[test]
fn test_manager_counters() {
    let counts: Vec<_> = MANAGER_BOOKINGS.iter().map(|b| (b.title, b.count)).collect();
    assert_eq!(
        counts,
        vec![
            ("Resort & Movies", 24),
            ("Beauty Salon", 18),
            ("Fitness Center", 35),
            ("Party Hall", 12),
        ]
    );
}

#[test]
fn test_queue_cards() {
    assert_eq!(HEADCOOK_QUEUE.path, "/catering-orders");
    assert_eq!(SUPERVISOR_QUEUE.path, "/stationery-orders");
}

#[test]
fn test_greeting_through_the_day() {
    let by_hour: Vec<_> = [6, 12, 17, 18, 23].into_iter().map(greeting).collect();
    assert_eq!(
        by_hour,
        vec![
            "Good morning",
            "Good afternoon",
            "Good afternoon",
            "Good evening",
            "Good evening",
        ]
    );
}
