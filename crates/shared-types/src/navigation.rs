use crate::role::Role;

/// Icon shown next to a navigation entry or dashboard shortcut.
///
/// The UI maps each variant to a concrete icon component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    LayoutDashboard,
    ShoppingCart,
    ShoppingBag,
    Ticket,
    Scissors,
    Dumbbell,
    PartyPopper,
    PlusCircle,
    List,
    Users,
    ChefHat,
    ClipboardList,
}

/// One item of the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub icon: NavIcon,
    pub label: &'static str,
    pub path: &'static str,
}

impl NavigationEntry {
    const fn new(icon: NavIcon, label: &'static str, path: &'static str) -> Self {
        Self { icon, label, path }
    }

    /// Whether this entry points at the page currently shown.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

const DASHBOARD: NavigationEntry =
    NavigationEntry::new(NavIcon::LayoutDashboard, "Dashboard", "/dashboard");

const VOYAGER_NAV: [NavigationEntry; 7] = [
    DASHBOARD,
    NavigationEntry::new(NavIcon::ShoppingCart, "Catering", "/catering"),
    NavigationEntry::new(NavIcon::ShoppingBag, "Stationery", "/stationery"),
    NavigationEntry::new(NavIcon::Ticket, "Resort & Movies", "/resort-movies"),
    NavigationEntry::new(NavIcon::Scissors, "Beauty Salon", "/beauty-salon"),
    NavigationEntry::new(NavIcon::Dumbbell, "Fitness Center", "/fitness-center"),
    NavigationEntry::new(NavIcon::PartyPopper, "Party Hall", "/party-hall"),
];

const ADMIN_NAV: [NavigationEntry; 4] = [
    DASHBOARD,
    NavigationEntry::new(NavIcon::PlusCircle, "Add Item", "/add-item"),
    NavigationEntry::new(NavIcon::List, "Manage Items", "/manage-items"),
    NavigationEntry::new(NavIcon::Users, "Voyager Registration", "/register-voyager"),
];

const MANAGER_NAV: [NavigationEntry; 5] = [
    DASHBOARD,
    NavigationEntry::new(NavIcon::Ticket, "Resort & Movies", "/resort-movies-bookings"),
    NavigationEntry::new(NavIcon::Scissors, "Beauty Salon", "/beauty-salon-bookings"),
    NavigationEntry::new(NavIcon::Dumbbell, "Fitness Center", "/fitness-center-bookings"),
    NavigationEntry::new(NavIcon::PartyPopper, "Party Hall", "/party-hall-bookings"),
];

const HEADCOOK_NAV: [NavigationEntry; 2] = [
    DASHBOARD,
    NavigationEntry::new(NavIcon::ChefHat, "Catering Orders", "/catering-orders"),
];

const SUPERVISOR_NAV: [NavigationEntry; 2] = [
    DASHBOARD,
    NavigationEntry::new(NavIcon::ClipboardList, "Stationery Orders", "/stationery-orders"),
];

/// Side menu for a recognized role, in display order.
pub fn navigation_for(role: Role) -> &'static [NavigationEntry] {
    match role {
        Role::Voyager => &VOYAGER_NAV,
        Role::Admin => &ADMIN_NAV,
        Role::Manager => &MANAGER_NAV,
        Role::HeadCook => &HEADCOOK_NAV,
        Role::Supervisor => &SUPERVISOR_NAV,
    }
}

/// Side menu for a stored role string. Unrecognized roles get no entries.
pub fn resolve_navigation(role: &str) -> &'static [NavigationEntry] {
    Role::parse(role).map(navigation_for).unwrap_or(&[])
}

/// Look up the menu entry that links to `path`, across every role.
pub fn entry_for_path(path: &str) -> Option<&'static NavigationEntry> {
    Role::ALL
        .into_iter()
        .flat_map(navigation_for)
        .find(|entry| entry.path == path)
}
