pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod services;

use crate::auth::use_auth;
use crate::icons::nav_icon;
use crate::notify;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu, LdShip, LdX};
use dioxus_free_icons::Icon;
use shared_types::{resolve_navigation, GateDecision, Identity};
use shared_ui::{
    use_toast, Avatar, Badge, BadgeVariant, Button, ButtonVariant, Separator, Skeleton,
};

use dashboard::Dashboard;
use landing::Landing;
use login::Login;
use not_found::NotFound;
use services::ServicePage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[layout(AccessGate)]
    #[layout(DashboardLayout)]
    #[route("/dashboard")]
    Dashboard {},
    // ── Voyager services ──
    #[route("/catering", ServicePage)]
    Catering {},
    #[route("/stationery", ServicePage)]
    Stationery {},
    #[route("/resort-movies", ServicePage)]
    ResortMovies {},
    #[route("/beauty-salon", ServicePage)]
    BeautySalon {},
    #[route("/fitness-center", ServicePage)]
    FitnessCenter {},
    #[route("/party-hall", ServicePage)]
    PartyHall {},
    // ── Admin ──
    #[route("/add-item", ServicePage)]
    AddItem {},
    #[route("/manage-items", ServicePage)]
    ManageItems {},
    #[route("/register-voyager", ServicePage)]
    RegisterVoyager {},
    // ── Manager booking queues ──
    #[route("/resort-movies-bookings", ServicePage)]
    ResortMoviesBookings {},
    #[route("/beauty-salon-bookings", ServicePage)]
    BeautySalonBookings {},
    #[route("/fitness-center-bookings", ServicePage)]
    FitnessCenterBookings {},
    #[route("/party-hall-bookings", ServicePage)]
    PartyHallBookings {},
    // ── Kitchen and stores ──
    #[route("/catering-orders", ServicePage)]
    CateringOrders {},
    #[route("/stationery-orders", ServicePage)]
    StationeryOrders {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Gate layout for every protected page.
#[component]
fn AccessGate() -> Element {
    rsx! {
        SessionGate {
            on_redirect: move |_| {
                navigator().replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

/// Shows `children` only for a resolved, signed-in session.
///
/// Until the persisted session has been read back, nothing is rendered and no
/// redirect happens, so a returning user never sees the login page flash.
/// Without a session `on_redirect` fires; the attempted page is not
/// remembered.
#[component]
fn SessionGate(on_redirect: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();

    match GateDecision::decide(auth.is_resolved(), auth.is_authenticated()) {
        GateDecision::Waiting => rsx! {
            div { class: "auth-guard-loading",
                Skeleton {
                    class: "auth-guard-skeleton",
                    lines: 3,
                    label: "Checking your session",
                }
            }
        },
        GateDecision::RedirectToLogin => {
            on_redirect.call(());
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        GateDecision::Render => children,
    }
}

/// Portal shell: role menu on the left (or behind a toggle on small
/// screens), page content on the right.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let toast = use_toast();
    let mut menu_open = use_signal(|| false);

    let logout = use_callback(move |_: ()| {
        let notice = auth.logout();
        notify::show(&toast, &notice);
        navigator().push(Route::Login {});
    });

    let Some(identity) = auth.identity() else {
        return rsx! { Outlet::<Route> {} };
    };
    let current_path = route.to_string();

    let mobile_menu_class = if menu_open() {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };
    let toggle_label = if menu_open() { "Close menu" } else { "Open menu" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "portal-shell",
            header { class: "mobile-header",
                div { class: "portal-brand",
                    Icon::<LdShip> { icon: LdShip, width: 24, height: 24 }
                    span { "Cruise Services" }
                }
                button {
                    class: "mobile-menu-toggle",
                    aria_label: toggle_label,
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    if menu_open() {
                        Icon::<LdX> { icon: LdX, width: 24, height: 24 }
                    } else {
                        Icon::<LdMenu> { icon: LdMenu, width: 24, height: 24 }
                    }
                }
            }

            div { class: mobile_menu_class,
                SideMenu {
                    identity: identity.clone(),
                    current_path: current_path.clone(),
                    on_navigate: move |_| menu_open.set(false),
                    on_logout: logout,
                }
            }

            aside { class: "side-panel",
                div { class: "portal-brand",
                    Icon::<LdShip> { icon: LdShip, width: 32, height: 32 }
                    span { "Cruise Services" }
                }
                SideMenu {
                    identity,
                    current_path,
                    on_navigate: move |_| {},
                    on_logout: logout,
                }
            }

            main { class: "portal-main",
                div { class: "portal-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// User card, role menu and logout button.
#[component]
fn SideMenu(
    identity: Identity,
    current_path: String,
    on_navigate: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let entries = resolve_navigation(&identity.role);
    let initials = identity.initials();
    let name = identity.name.clone();
    let role_label = identity.role_label().to_string();

    rsx! {
        div { class: "side-menu-user",
            Avatar { name, initials }
            div {
                p { class: "side-menu-name", "{identity.name}" }
                Badge { variant: BadgeVariant::Secondary, "{role_label}" }
            }
        }

        nav { class: "side-menu-nav",
            for entry in entries.iter() {
                Link {
                    key: "{entry.path}",
                    to: entry.path,
                    class: if entry.is_active(&current_path) { "side-menu-link active" } else { "side-menu-link" },
                    onclick: move |_| on_navigate.call(()),
                    {nav_icon(entry.icon, 20)}
                    span { "{entry.label}" }
                }
            }
        }

        Separator {}

        Button {
            variant: ButtonVariant::Ghost,
            class: "side-menu-logout",
            onclick: move |_| on_logout.call(()),
            Icon::<LdLogOut> { icon: LdLogOut, width: 20, height: 20 }
            span { "Logout" }
        }
    }
}
