use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdAnchor, LdArrowLeft, LdShip};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;

/// 404 page for any path outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    use_effect(use_reactive!(|(path,)| {
        tracing::warn!(%path, "no route matches requested path");
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-ship",
                    Icon::<LdShip> { icon: LdShip, width: 80, height: 80 }
                }
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Lost at Sea" }
                p { class: "not-found-message",
                    "The page you're looking for seems to have sailed away. Let's navigate back to familiar waters."
                }
                div { class: "not-found-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| navigator().go_back(),
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                        "Go Back"
                    }
                    Link { to: Route::Landing {}, class: "not-found-link",
                        Icon::<LdAnchor> { icon: LdAnchor, width: 16, height: 16 }
                        "Return to Home"
                    }
                }
            }
        }
    }
}
