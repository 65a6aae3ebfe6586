use dioxus::prelude::*;
use shared_types::{AppError, SessionStorage};
use std::collections::HashMap;

/// `localStorage`-backed session storage.
///
/// Browser reads are asynchronous, so the record is fetched once by
/// [`BrowserStorage::hydrate`] and served from a snapshot afterwards.
/// Writes update the snapshot and are pushed to the browser immediately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserStorage {
    snapshot: HashMap<String, String>,
}

impl BrowserStorage {
    /// Read `key` from `localStorage`. An unavailable store yields an empty
    /// snapshot so the portal starts signed out.
    pub async fn hydrate(key: &str) -> Self {
        let mut snapshot = HashMap::new();
        match read_item(key).await {
            Ok(Some(value)) => {
                snapshot.insert(key.to_string(), value);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("localStorage unavailable: {e}"),
        }
        Self { snapshot }
    }

    /// Snapshot already holding `value` under `key`, as `hydrate` would leave it.
    #[cfg(test)]
    pub fn with_record(key: &str, value: &str) -> Self {
        let mut snapshot = HashMap::new();
        snapshot.insert(key.to_string(), value.to_string());
        Self { snapshot }
    }
}

impl SessionStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.snapshot.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let script = format!(
            "window.localStorage.setItem({}, {});",
            js_string(key)?,
            js_string(value)?
        );
        self.snapshot.insert(key.to_string(), value.to_string());
        document::eval(&script);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.snapshot.remove(key);
        match js_string(key) {
            Ok(key) => {
                document::eval(&format!("window.localStorage.removeItem({key});"));
            }
            Err(e) => tracing::warn!("could not clear session record: {e}"),
        }
    }
}

async fn read_item(key: &str) -> Result<Option<String>, AppError> {
    let script = format!("return window.localStorage.getItem({});", js_string(key)?);
    document::eval(&script)
        .join::<Option<String>>()
        .await
        .map_err(|e| AppError::storage(e.to_string()))
}

/// Quote a value as a JavaScript string literal.
fn js_string(value: &str) -> Result<String, AppError> {
    Ok(serde_json::to_string(value)?)
}
