use dioxus::prelude::*;
use shared_types::{BookingCounter, MANAGER_BOOKINGS};
use shared_ui::{Button, ButtonVariant, Card, CardContent};

use super::tint_for;
use crate::icons::nav_icon;

/// Booking counters for each bookable facility.
#[component]
pub fn ManagerDashboard() -> Element {
    rsx! {
        div { class: "dashboard-grid", "data-columns": "4",
            for (index, booking) in MANAGER_BOOKINGS.iter().enumerate() {
                CounterCard { key: "{booking.path}", booking: *booking, tint: tint_for(index) }
            }
        }
    }
}

#[component]
fn CounterCard(booking: BookingCounter, tint: &'static str) -> Element {
    rsx! {
        Card { class: "dashboard-card",
            CardContent {
                div { class: "dashboard-counter",
                    span { class: "dashboard-counter-icon", "data-tint": tint,
                        {nav_icon(booking.icon, 24)}
                    }
                    span { class: "dashboard-counter-value", "{booking.count}" }
                }
                h3 { class: "dashboard-counter-title", "{booking.title} Bookings" }
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| {
                        navigator().push(booking.path);
                    },
                    "View Details"
                }
            }
        }
    }
}
