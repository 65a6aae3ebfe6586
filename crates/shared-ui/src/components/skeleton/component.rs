use dioxus::prelude::*;

/// Stack of pulsing bars standing in for content that is still loading.
///
/// Announced to assistive tech as a busy status region; the last bar is
/// drawn shorter so several lines read like a paragraph.
#[component]
pub fn Skeleton(
    #[props(default = 1)] lines: usize,
    #[props(default = "Loading".to_string())] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton-stack", None, false),
        Attribute::new("role", "status", None, false),
        Attribute::new("aria-busy", "true", None, false),
        Attribute::new("aria-label", label, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let lines = lines.max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            for (line, last) in (0..lines).map(|line| (line, lines > 1 && line + 1 == lines)) {
                div {
                    key: "{line}",
                    class: "skeleton",
                    "data-last": "{last}",
                }
            }
        }
    }
}
