use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Horizontal rule. With a `label`, the text sits between two rules.
#[component]
pub fn Separator(#[props(default)] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if !label.is_empty() {
            div { class: "portal-separator-labeled",
                prim::Separator { class: "portal-separator" }
                span { class: "portal-separator-label", "{label}" }
                prim::Separator { class: "portal-separator" }
            }
        } else {
            prim::Separator { class: "portal-separator" }
        }
    }
}
