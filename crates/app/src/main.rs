use dioxus::prelude::*;
use shared_types::PortalConfig;

mod auth;
mod config;
mod icons;
pub mod notify;
mod routes;
mod storage;
use auth::{use_session_restore, AuthState};
use config::portal_config;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    let level = portal_config().logging.tracing_level();
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {e}");
    }
    tracing::info!(brand = %portal_config().portal.brand, "starting portal");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config: PortalConfig = use_context_provider(|| portal_config().clone());
    let auth = use_context_provider(|| AuthState::new(&config.portal.storage_key));
    use_session_restore(auth);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        document::Title { "{config.portal.brand}" }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
