use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

use dioxus_primitives::toast::ToastOptions;

pub use dioxus_primitives::toast::{use_toast, Toasts};

/// Hosts the toast stack; wrap the router in it once at the app root.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Colour of a portal toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Info,
    Error,
}

/// Portal toasts are one line: the title, then the detail.
pub fn toast_line(title: &str, description: &str) -> String {
    if description.is_empty() {
        title.to_string()
    } else {
        format!("{title}: {description}")
    }
}

/// Push a one-line toast with the default timeout.
pub fn announce(toasts: &Toasts, tone: ToastTone, title: &str, description: &str) {
    let line = toast_line(title, description);
    match tone {
        ToastTone::Success => {
            toasts.success(line, ToastOptions::new());
        }
        ToastTone::Info => {
            toasts.info(line, ToastOptions::new());
        }
        ToastTone::Error => {
            toasts.error(line, ToastOptions::new());
        }
    }
}
