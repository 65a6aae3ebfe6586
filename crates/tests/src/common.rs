use shared_types::{
    AppError, GateDecision, Identity, MemoryStorage, Role, SessionStorage, SessionStore,
};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};

/// Storage key used by the portal's default config.
pub const KEY: &str = "cruise_user";

pub const PASSWORD: &str = "password123";

/// Store over empty storage with the demo accounts, not yet restored.
pub fn fresh_store() -> SessionStore<MemoryStorage> {
    SessionStore::with_demo_credentials(MemoryStorage::new(), KEY)
}

/// Store over empty storage, already restored (no session).
pub fn resolved_store() -> SessionStore<MemoryStorage> {
    let mut store = fresh_store();
    store.restore();
    store
}

/// Simulate an app restart: a new store over the previous run's records.
pub fn restart(store: SessionStore<MemoryStorage>) -> SessionStore<MemoryStorage> {
    SessionStore::with_demo_credentials(store.into_storage(), KEY)
}

/// What the access gate would do right now.
pub fn gate<S: SessionStorage>(store: &SessionStore<S>) -> GateDecision {
    GateDecision::decide(store.is_resolved(), store.is_authenticated())
}

pub fn voyager() -> Identity {
    Identity::new("1", "John Voyager", "voyager@cruise.com", Role::Voyager)
}

/// Persisted record for `identity`, as the store writes it.
pub fn record_for(identity: &Identity) -> String {
    serde_json::to_string(identity).expect("identity serializes")
}

/// Storage whose writes always fail, e.g. a full or disabled browser store.
#[derive(Debug, Default)]
pub struct FailingStorage {
    pub removals: usize,
}

impl SessionStorage for FailingStorage {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn store(&mut self, _key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::storage("quota exceeded"))
    }

    fn remove(&mut self, _key: &str) {
        self.removals += 1;
    }
}

/// Store shared between a test and the task that restores it.
pub type SharedStore = Arc<Mutex<SessionStore<MemoryStorage>>>;

pub fn shared_fresh_store() -> SharedStore {
    Arc::new(Mutex::new(fresh_store()))
}

/// Resolve `store` once storage arrives on `rx`, the way the app does after
/// reading browser storage asynchronously.
pub async fn restore_when_ready(store: SharedStore, rx: oneshot::Receiver<MemoryStorage>) {
    let storage = rx.await.expect("storage sender dropped");
    store.lock().await.resolve_with(storage);
}
