use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

/// Avatar sizes used by the portal.
#[derive(Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn as_str(self) -> &'static str {
        match self {
            AvatarSize::Small => "small",
            AvatarSize::Medium => "medium",
            AvatarSize::Large => "large",
        }
    }
}

/// Round initials badge for a signed-in user. Portal accounts carry no
/// picture, so the fallback is the whole avatar.
#[component]
pub fn Avatar(
    name: String,
    initials: String,
    #[props(default)] size: AvatarSize,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "portal-avatar-frame",
            "data-size": size.as_str(),
            role: "img",
            aria_label: name,
            prim::Avatar { class: "portal-avatar",
                prim::AvatarFallback { class: "portal-avatar-fallback", "{initials}" }
            }
        }
    }
}
