/// Entry point for unauthenticated users.
pub const LOGIN_PATH: &str = "/login";

/// Default landing view after login.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Paths reachable without a session.
pub const PUBLIC_PATHS: [&str; 2] = ["/", LOGIN_PATH];

/// Paths that sit behind the access gate.
pub const GATED_PATHS: [&str; 16] = [
    DASHBOARD_PATH,
    "/catering",
    "/stationery",
    "/resort-movies",
    "/beauty-salon",
    "/fitness-center",
    "/party-hall",
    "/add-item",
    "/manage-items",
    "/register-voyager",
    "/resort-movies-bookings",
    "/beauty-salon-bookings",
    "/fitness-center-bookings",
    "/party-hall-bookings",
    "/catering-orders",
    "/stationery-orders",
];

/// How the router treats a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Gated,
    NotFound,
}

/// Classify a path. Trailing slashes are ignored except on the root.
pub fn route_access(path: &str) -> RouteAccess {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    if PUBLIC_PATHS.contains(&trimmed) {
        RouteAccess::Public
    } else if GATED_PATHS.contains(&trimmed) {
        RouteAccess::Gated
    } else {
        RouteAccess::NotFound
    }
}
