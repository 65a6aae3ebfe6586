use crate::navigation::NavIcon;
use crate::role::Role;

/// The landing view shown after login, one variant per role.
///
/// `UnknownRole` carries the unrecognized role string so the placeholder can
/// be rendered instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Voyager,
    Admin,
    Manager,
    HeadCook,
    Supervisor,
    UnknownRole(String),
}

impl From<Role> for DashboardView {
    fn from(role: Role) -> Self {
        match role {
            Role::Voyager => DashboardView::Voyager,
            Role::Admin => DashboardView::Admin,
            Role::Manager => DashboardView::Manager,
            Role::HeadCook => DashboardView::HeadCook,
            Role::Supervisor => DashboardView::Supervisor,
        }
    }
}

/// Pick the dashboard for a stored role string.
pub fn compose_dashboard(role: &str) -> DashboardView {
    match Role::parse(role) {
        Some(role) => role.into(),
        None => DashboardView::UnknownRole(role.to_string()),
    }
}

/// Card linking to a service or management page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub icon: NavIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

/// Booking counter shown to managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingCounter {
    pub icon: NavIcon,
    pub title: &'static str,
    pub count: u32,
    pub path: &'static str,
}

pub const VOYAGER_SERVICES: [Shortcut; 6] = [
    Shortcut {
        icon: NavIcon::ShoppingCart,
        title: "Catering",
        description: "Order food, snacks and beverages",
        path: "/catering",
    },
    Shortcut {
        icon: NavIcon::ShoppingBag,
        title: "Stationery",
        description: "Order gift items, books and more",
        path: "/stationery",
    },
    Shortcut {
        icon: NavIcon::Ticket,
        title: "Resort & Movies",
        description: "Book movie tickets and resort experiences",
        path: "/resort-movies",
    },
    Shortcut {
        icon: NavIcon::Scissors,
        title: "Beauty Salon",
        description: "Book appointments for beauty treatments",
        path: "/beauty-salon",
    },
    Shortcut {
        icon: NavIcon::Dumbbell,
        title: "Fitness Center",
        description: "Book gym sessions and equipment",
        path: "/fitness-center",
    },
    Shortcut {
        icon: NavIcon::PartyPopper,
        title: "Party Hall",
        description: "Book party venues for celebrations",
        path: "/party-hall",
    },
];

pub const ADMIN_ACTIONS: [Shortcut; 3] = [
    Shortcut {
        icon: NavIcon::PlusCircle,
        title: "Add Item",
        description: "Add new items to the system",
        path: "/add-item",
    },
    Shortcut {
        icon: NavIcon::List,
        title: "Manage Items",
        description: "Edit or delete existing items",
        path: "/manage-items",
    },
    Shortcut {
        icon: NavIcon::Users,
        title: "Voyager Registration",
        description: "Register new voyagers to the system",
        path: "/register-voyager",
    },
];

pub const MANAGER_BOOKINGS: [BookingCounter; 4] = [
    BookingCounter {
        icon: NavIcon::Ticket,
        title: "Resort & Movies",
        count: 24,
        path: "/resort-movies-bookings",
    },
    BookingCounter {
        icon: NavIcon::Scissors,
        title: "Beauty Salon",
        count: 18,
        path: "/beauty-salon-bookings",
    },
    BookingCounter {
        icon: NavIcon::Dumbbell,
        title: "Fitness Center",
        count: 35,
        path: "/fitness-center-bookings",
    },
    BookingCounter {
        icon: NavIcon::PartyPopper,
        title: "Party Hall",
        count: 12,
        path: "/party-hall-bookings",
    },
];

pub const HEADCOOK_QUEUE: Shortcut = Shortcut {
    icon: NavIcon::ChefHat,
    title: "Catering Orders",
    description: "View and manage all catering orders placed by voyagers",
    path: "/catering-orders",
};

pub const SUPERVISOR_QUEUE: Shortcut = Shortcut {
    icon: NavIcon::ClipboardList,
    title: "Stationery Orders",
    description: "View and manage all stationery orders placed by voyagers",
    path: "/stationery-orders",
};

/// Salutation for the dashboard header, by local hour (0-23).
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}
