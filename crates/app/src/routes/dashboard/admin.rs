use dioxus::prelude::*;
use shared_types::ADMIN_ACTIONS;

use super::{tint_for, ShortcutCard};

/// Item and voyager management shortcuts.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        div { class: "dashboard-grid", "data-columns": "3",
            for (index, action) in ADMIN_ACTIONS.iter().enumerate() {
                ShortcutCard {
                    key: "{action.path}",
                    shortcut: *action,
                    tint: tint_for(index),
                    action: format!("Go to {}", action.title),
                }
            }
        }
    }
}
