//! Durable key-value backends for the session. Front-ends provide their own
//! (a JSON file, browser `localStorage`); `MemoryStore` backs tests and
//! short-lived tools.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("session storage read failed: {0}")]
    Read(String),
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Minimal durable key-value contract the session needs.
pub trait SessionStore {
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    /// Returns `StoreError` if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw entries, bypassing the session writer.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() -> Result<(), StoreError> {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("token", "abc")?;
        assert_eq!(other.get("token")?, Some("abc".to_string()));
        other.remove("token")?;
        assert_eq!(store.get("token")?, None);
        Ok(())
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("role").is_ok());
    }
}
