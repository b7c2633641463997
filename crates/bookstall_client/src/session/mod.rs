//! Session state shared by every view. `SessionContext` is the single writer
//! (`login`/`logout`); views read a `Session` snapshot when they mount. The
//! credential is wrapped in `SecretString` and must never be logged.

mod store;

pub use store::{MemoryStore, SessionStore, StoreError};

use crate::role::{Principal, Role};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

/// Store key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Store key holding the role tag.
pub const ROLE_KEY: &str = "role";

/// Snapshot of the persisted session fields.
#[derive(Clone, Debug, Default)]
pub struct Session {
    credential: Option<SecretString>,
    role: Option<Role>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Builds a snapshot from raw stored values. Blank credentials count as
    /// absent and unknown role tags as no role.
    #[must_use]
    pub fn from_raw(credential: Option<String>, role_tag: Option<&str>) -> Self {
        let credential = credential
            .filter(|value| !value.trim().is_empty())
            .map(SecretString::from);
        Self {
            credential,
            role: role_tag.and_then(Role::parse),
        }
    }

    /// True iff a credential is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// The role, provided a credential is also present.
    #[must_use]
    pub fn role_of(&self) -> Principal {
        match (&self.credential, self.role) {
            (Some(_), Some(role)) => Principal::Authenticated(role),
            _ => Principal::Anonymous,
        }
    }

    #[must_use]
    pub fn credential(&self) -> Option<&SecretString> {
        self.credential.as_ref()
    }
}

/// Explicit session handle injected into flows and views.
#[derive(Clone, Debug)]
pub struct SessionContext<S> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the persisted fields. An unreadable store reads as anonymous.
    pub fn session(&self) -> Session {
        let credential = self.read(TOKEN_KEY);
        let role = self.read(ROLE_KEY);
        Session::from_raw(credential, role.as_deref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn role_of(&self) -> Principal {
        self.session().role_of()
    }

    /// Persists credential and role together. If the role cannot be written
    /// the credential is removed again so no half session remains.
    ///
    /// # Errors
    /// Returns `StoreError` if either write fails.
    pub fn login(&self, role: Role, credential: &SecretString) -> Result<(), StoreError> {
        self.store.set(TOKEN_KEY, credential.expose_secret())?;
        if let Err(err) = self.store.set(ROLE_KEY, role.as_str()) {
            if let Err(rollback) = self.store.remove(TOKEN_KEY) {
                warn!("failed to roll back session credential: {rollback}");
            }
            return Err(err);
        }
        debug!(%role, "session opened");
        Ok(())
    }

    /// Clears both fields. Both removals are attempted even if one fails.
    ///
    /// # Errors
    /// Returns the first `StoreError` encountered.
    pub fn logout(&self) -> Result<(), StoreError> {
        let token = self.store.remove(TOKEN_KEY);
        let role = self.store.remove(ROLE_KEY);
        debug!("session cleared");
        token.and(role)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to read session key {key}: {err}");
                None
            }
        }
    }
}
