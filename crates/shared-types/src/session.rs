//! Session store: the single owner of the active identity.
//!
//! Decisions (`decide_login`, `decode_record`) are pure functions; the
//! store applies their effects to a [`SessionStorage`] backend. The UI
//! holds one store in its context, tests build their own with
//! [`MemoryStorage`].

use std::collections::HashMap;

use crate::error::AppError;
use crate::identity::{CredentialDirectory, Identity};

/// Durable client storage holding string records by key.
pub trait SessionStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&mut self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&mut self, key: &str);
}

/// In-memory storage for tests and targets without browser storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one record, e.g. a session left by a previous run.
    pub fn with_record(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Info,
    Destructive,
}

/// User-visible notification emitted by session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: NoticeTone,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>, tone: NoticeTone) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            tone,
        }
    }

    pub fn login_succeeded(identity: &Identity) -> Self {
        Self::new(
            "Login Successful",
            format!("Welcome back, {}!", identity.name),
            NoticeTone::Success,
        )
    }

    pub fn login_failed() -> Self {
        Self::new(
            "Login Failed",
            "Invalid email or password",
            NoticeTone::Destructive,
        )
    }

    pub fn logged_out() -> Self {
        Self::new(
            "Logged Out",
            "You have been successfully logged out",
            NoticeTone::Info,
        )
    }
}

/// Result of checking a credential pair.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated(Identity),
    Rejected,
}

impl LoginOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            LoginOutcome::Authenticated(identity) => Some(identity),
            LoginOutcome::Rejected => None,
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            LoginOutcome::Authenticated(identity) => Notice::login_succeeded(identity),
            LoginOutcome::Rejected => Notice::login_failed(),
        }
    }
}

/// Decide what a login attempt does, without touching any state.
pub fn decide_login(directory: &CredentialDirectory, email: &str, password: &str) -> LoginOutcome {
    match directory.authenticate(email, password) {
        Some(identity) => LoginOutcome::Authenticated(identity),
        None => LoginOutcome::Rejected,
    }
}

/// Parse a persisted record. Anything that is not a well-formed identity is absent.
pub fn decode_record(raw: &str) -> Option<Identity> {
    serde_json::from_str(raw).ok()
}

/// Serialize an identity into the persisted record format.
pub fn encode_record(identity: &Identity) -> Result<String, AppError> {
    Ok(serde_json::to_string(identity)?)
}

/// Owner of the active session and its persisted record.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
    directory: CredentialDirectory,
    current: Option<Identity>,
    resolved: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S, key: impl Into<String>, directory: CredentialDirectory) -> Self {
        Self {
            storage,
            key: key.into(),
            directory,
            current: None,
            resolved: false,
        }
    }

    /// Store backed by the demo account list.
    pub fn with_demo_credentials(storage: S, key: impl Into<String>) -> Self {
        Self::new(storage, key, CredentialDirectory::demo())
    }

    /// Load the persisted identity, if any, and mark the store resolved.
    ///
    /// A record that fails to parse is removed so the next start sees a
    /// clean slate.
    pub fn restore(&mut self) -> Option<&Identity> {
        self.current = match self.storage.load(&self.key) {
            Some(raw) => match decode_record(&raw) {
                Some(identity) => {
                    tracing::debug!(email = %identity.email, "restored persisted session");
                    Some(identity)
                }
                None => {
                    tracing::warn!(key = %self.key, "discarding unreadable session record");
                    self.storage.remove(&self.key);
                    None
                }
            },
            None => {
                tracing::debug!("no persisted session");
                None
            }
        };
        self.resolved = true;
        self.current.as_ref()
    }

    /// Swap in a backend that only became readable now, then resolve.
    ///
    /// A session opened before resolution wins over whatever the backend
    /// holds and is written through to it.
    pub fn resolve_with(&mut self, storage: S) -> Option<&Identity> {
        self.storage = storage;
        match self.current.clone() {
            Some(identity) => {
                tracing::debug!(email = %identity.email, "keeping session opened before restore");
                self.persist(&identity);
                self.resolved = true;
                self.current.as_ref()
            }
            None => self.restore(),
        }
    }

    /// Check the credential pair; on success make it the active session and
    /// persist it. A failed attempt leaves the session untouched.
    pub fn login(&mut self, email: &str, password: &str) -> LoginOutcome {
        let outcome = decide_login(&self.directory, email, password);
        match &outcome {
            LoginOutcome::Authenticated(identity) => {
                tracing::info!(email, role = %identity.role, "login succeeded");
                self.persist(identity);
                self.current = Some(identity.clone());
            }
            LoginOutcome::Rejected => {
                tracing::info!(email, "login rejected");
            }
        }
        outcome
    }

    /// Clear the session and its record. Safe to call with no session.
    pub fn logout(&mut self) -> Notice {
        if let Some(identity) = self.current.take() {
            tracing::info!(email = %identity.email, "logged out");
        }
        self.storage.remove(&self.key);
        Notice::logged_out()
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// True once `restore` has run.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn directory(&self) -> &CredentialDirectory {
        &self.directory
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Hand the backend back, e.g. to start a fresh store over the same records.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, identity: &Identity) {
        let result = encode_record(identity).and_then(|raw| self.storage.store(&self.key, &raw));
        if let Err(e) = result {
            tracing::warn!("session kept in memory only: {e}");
        }
    }
}
