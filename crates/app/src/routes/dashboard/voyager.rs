use dioxus::prelude::*;
use shared_types::VOYAGER_SERVICES;

use super::{tint_for, ShortcutCard};

/// Service shortcuts for passengers.
#[component]
pub fn VoyagerDashboard() -> Element {
    rsx! {
        div { class: "dashboard-grid", "data-columns": "3",
            for (index, service) in VOYAGER_SERVICES.iter().enumerate() {
                ShortcutCard {
                    key: "{service.path}",
                    shortcut: *service,
                    tint: tint_for(index),
                    action: "Access Service".to_string(),
                }
            }
        }
    }
}
