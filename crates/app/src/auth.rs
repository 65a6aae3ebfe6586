use crate::storage::BrowserStorage;
use dioxus::prelude::*;
use shared_types::{Identity, LoginOutcome, Notice, SessionStore};

/// Global session state.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    pub session: Signal<SessionStore<BrowserStorage>>,
}

impl AuthState {
    /// Unresolved session over an empty browser snapshot.
    pub fn new(storage_key: &str) -> Self {
        Self {
            session: Signal::new(SessionStore::with_demo_credentials(
                BrowserStorage::default(),
                storage_key,
            )),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.session.read().is_resolved()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.read().current_identity().cloned()
    }

    /// Swap in the hydrated backend and resolve the session against it.
    ///
    /// A login made on `/login` before hydration finished is kept.
    pub fn restore(&mut self, storage: BrowserStorage) {
        self.session.write().resolve_with(storage);
    }

    pub fn login(&mut self, email: &str, password: &str) -> LoginOutcome {
        self.session.write().login(email, password)
    }

    pub fn logout(&mut self) -> Notice {
        self.session.write().logout()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Read the browser record once at startup and resolve the session.
pub fn use_session_restore(mut auth: AuthState) {
    use_future(move || async move {
        let key = auth.session.peek().storage_key().to_string();
        let storage = BrowserStorage::hydrate(&key).await;
        auth.restore(storage);
    });
}
