use pretty_assertions::assert_eq;
use shared_types::{resolve_navigation, route_access, NavIcon, Role, RouteAccess};

fn paths(role: &str) -> Vec<&'static str> {
    resolve_navigation(role).iter().map(|e| e.path).collect()
}

#[test]
fn test_admin_menu() {
    assert_eq!(
        paths("admin"),
        vec!["/dashboard", "/add-item", "/manage-items", "/register-voyager"]
    );
    let labels: Vec<_> = resolve_navigation("admin").iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec!["Dashboard", "Add Item", "Manage Items", "Voyager Registration"]
    );
}

#[test]
fn test_manager_menu() {
    assert_eq!(
        paths("manager"),
        vec![
            "/dashboard",
            "/resort-movies-bookings",
            "/beauty-salon-bookings",
            "/fitness-center-bookings",
            "/party-hall-bookings",
        ]
    );
}

#[test]
fn test_kitchen_and_stores_menus() {
    assert_eq!(paths("headcook"), vec!["/dashboard", "/catering-orders"]);
    assert_eq!(paths("supervisor"), vec!["/dashboard", "/stationery-orders"]);
}

#[test]
fn test_menu_icons_follow_entries() {
    let icons: Vec<_> = resolve_navigation("voyager").iter().map(|e| e.icon).collect();
    assert_eq!(
        icons,
        vec![
            NavIcon::LayoutDashboard,
            NavIcon::ShoppingCart,
            NavIcon::ShoppingBag,
            NavIcon::Ticket,
            NavIcon::Scissors,
            NavIcon::Dumbbell,
            NavIcon::PartyPopper,
        ]
    );
}

#[test]
fn test_unrecognized_roles_get_no_menu() {
    for role in ["captain", "", "Voyager", "head cook"] {
        assert!(resolve_navigation(role).is_empty(), "{role:?}");
    }
}

#[test]
fn test_every_menu_path_is_routable_and_gated() {
    for role in Role::ALL {
        for entry in resolve_navigation(role.as_str()) {
            assert_eq!(route_access(entry.path), RouteAccess::Gated, "{}", entry.path);
        }
    }
}

#[test]
fn test_public_and_unknown_paths() {
    assert_eq!(route_access("/"), RouteAccess::Public);
    assert_eq!(route_access("/login"), RouteAccess::Public);
    assert_eq!(route_access("/engine-room"), RouteAccess::NotFound);
    assert_eq!(route_access("/catering/menu"), RouteAccess::NotFound);
}
