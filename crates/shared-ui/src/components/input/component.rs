use dioxus::prelude::*;

/// Text input with an optional leading icon and inline error message.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let icon_flag = if icon.is_some() { "true" } else { "false" };
    let invalid = if error.is_some() { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            div { class: "input-field", "data-icon": icon_flag,
                if let Some(icon) = icon {
                    span { class: "input-icon", {icon} }
                }
                input {
                    r#type: "{input_type}",
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    required: required,
                    aria_invalid: invalid,
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
            }
            if let Some(err) = error {
                div { class: "input-error", "{err}" }
            }
        }
    }
}
