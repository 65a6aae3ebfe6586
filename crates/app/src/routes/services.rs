use dioxus::prelude::*;
use shared_types::entry_for_path;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle};

use crate::icons::nav_icon;
use crate::routes::Route;

/// Shared page for every service and staff queue in the menu.
///
/// The title and icon come from the menu entry for the current path.
#[component]
pub fn ServicePage() -> Element {
    let route: Route = use_route();
    let path = route.to_string();

    let Some(entry) = entry_for_path(&path) else {
        tracing::warn!(%path, "service page without a menu entry");
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./services.css") }

        PageHeader {
            PageTitle { "{entry.label}" }
        }

        Card { class: "service-card",
            CardHeader {
                div { class: "service-icon", {nav_icon(entry.icon, 24)} }
                CardTitle { "{entry.label}" }
                CardDescription { "Online booking for this service is not open yet." }
            }
            CardContent {
                p { "Contact guest services to book or manage {entry.label}." }
            }
        }
    }
}
