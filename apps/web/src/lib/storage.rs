//! `SessionStore` over the browser's `localStorage`. The handle is looked up
//! on every call, so the store itself holds nothing and can live in a
//! reactive context. Off the browser every call reports the storage as
//! unavailable, which the session reads as anonymous.

use bookstall_client::{SessionStore, StoreError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|_| StoreError::Unavailable("localStorage access denied".to_string()))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StoreError::Read(format!("cannot read {key}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::Write(format!("cannot write {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| StoreError::Write(format!("cannot remove {key}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(unavailable())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn unavailable() -> StoreError {
    StoreError::Unavailable("localStorage exists only in the browser".to_string())
}
