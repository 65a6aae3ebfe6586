use dioxus::prelude::*;
use shared_types::{HEADCOOK_QUEUE, SUPERVISOR_QUEUE};

use super::ShortcutCard;

#[component]
pub fn HeadCookDashboard() -> Element {
    rsx! {
        ShortcutCard {
            shortcut: HEADCOOK_QUEUE,
            tint: "ocean",
            action: "View Catering Orders".to_string(),
        }
    }
}

#[component]
pub fn SupervisorDashboard() -> Element {
    rsx! {
        ShortcutCard {
            shortcut: SUPERVISOR_QUEUE,
            tint: "ocean",
            action: "View Stationery Orders".to_string(),
        }
    }
}
