pub mod admin;
pub mod manager;
pub mod queue;
pub mod voyager;

use chrono::Timelike;
use dioxus::prelude::*;
use shared_types::{compose_dashboard, greeting, DashboardView, Shortcut};
use shared_ui::{
    Button, Card, CardContent, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle,
};

use crate::auth::use_auth;
use crate::icons::nav_icon;

/// Header tints cycled across shortcut cards.
const TINTS: [&str; 3] = ["coral", "ocean", "sand"];

/// Tint for the card at `index` in a grid.
pub fn tint_for(index: usize) -> &'static str {
    TINTS[index % TINTS.len()]
}

/// Greeting header plus the dashboard for the signed-in user's role.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let Some(identity) = auth.identity() else {
        return rsx! {};
    };
    let salutation = greeting(chrono::Local::now().hour());

    let content = match compose_dashboard(&identity.role) {
        DashboardView::Voyager => rsx! { voyager::VoyagerDashboard {} },
        DashboardView::Admin => rsx! { admin::AdminDashboard {} },
        DashboardView::Manager => rsx! { manager::ManagerDashboard {} },
        DashboardView::HeadCook => rsx! { queue::HeadCookDashboard {} },
        DashboardView::Supervisor => rsx! { queue::SupervisorDashboard {} },
        DashboardView::UnknownRole(role) => rsx! { UnknownRole { role } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "{salutation}, {identity.name}" }
            PageSubtitle { "Welcome to your cruise services dashboard" }
        }

        {content}
    }
}

/// Placeholder for a stored role the portal does not recognize.
#[component]
fn UnknownRole(role: String) -> Element {
    use_hook(|| tracing::warn!(%role, "no dashboard for role"));
    rsx! {
        div { class: "dashboard-unknown", "Unknown user role" }
    }
}

/// Card with a tinted header that links to a service or management page.
#[component]
pub fn ShortcutCard(shortcut: Shortcut, tint: &'static str, action: String) -> Element {
    rsx! {
        Card { class: "dashboard-card",
            CardHeader { tint: tint.to_string(),
                div { class: "dashboard-card-heading",
                    CardTitle { "{shortcut.title}" }
                    span { class: "dashboard-card-icon", {nav_icon(shortcut.icon, 24)} }
                }
            }
            CardContent {
                p { class: "dashboard-card-description", "{shortcut.description}" }
                Button {
                    full_width: true,
                    onclick: move |_| {
                        navigator().push(shortcut.path);
                    },
                    "{action}"
                }
            }
        }
    }
}
