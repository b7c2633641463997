//! One flow per view. Flows run the access check first, then validation,
//! then the API calls, and report back what the front-end should render,
//! show as notices, and where it should navigate next. Front-ends never
//! call `ApiClient` directly.

pub mod admin_dashboard;
pub mod auth;
pub mod books;
pub mod client_dashboard;
pub mod landing;
pub mod my_books;
pub mod sell;

use crate::api::ApiError;
use crate::forms::FieldErrors;
use crate::guard::{guard, Guard};
use crate::notice::Notice;
use crate::session::Session;
use crate::view::{Access, View};
use secrecy::SecretString;
use std::fmt;
use tracing::debug;

/// Title used for notices of book operations.
pub(crate) const SUCCESS_TITLE: &str = "Success";
pub(crate) const ERROR_TITLE: &str = "Error";

/// Why a flow stopped before producing data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The principal may not be here; nothing was sent.
    Redirect(View),
    /// The form has field errors; nothing was sent.
    Invalid(FieldErrors),
    /// The request failed.
    Failed(Notice),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redirect(view) => write!(f, "redirected to {view}"),
            Self::Invalid(errors) => write!(f, "{} invalid field(s)", errors.len()),
            Self::Failed(notice) => write!(f, "{notice}"),
        }
    }
}

impl From<FieldErrors> for Rejection {
    fn from(errors: FieldErrors) -> Self {
        Self::Invalid(errors)
    }
}

/// Result of a flow that got past its checks. `notices` may hold errors
/// for sections that failed to load while others succeeded.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<T> {
    pub data: T,
    pub notices: Vec<Notice>,
    pub navigate: Option<View>,
}

impl<T> Outcome<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            notices: Vec::new(),
            navigate: None,
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    #[must_use]
    pub fn navigate_to(mut self, view: View) -> Self {
        self.navigate = Some(view);
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            data: f(self.data),
            notices: self.notices,
            navigate: self.navigate,
        }
    }
}

pub type Flow<T> = Result<Outcome<T>, Rejection>;

/// Runs the access check for `view`.
///
/// # Errors
/// Returns `Rejection::Redirect` when the guard does not allow entry.
pub fn require(view: View, session: &Session) -> Result<(), Rejection> {
    check(view.access(), session)
}

fn check(access: Access, session: &Session) -> Result<(), Rejection> {
    match guard(access, session.role_of()) {
        Guard::Allow => Ok(()),
        Guard::RedirectTo(target) => {
            debug!(%target, "access denied, redirecting");
            Err(Rejection::Redirect(target))
        }
    }
}

/// Runs the access check and hands back the credential for bearer calls.
pub(crate) fn authorize(access: Access, session: &Session) -> Result<SecretString, Rejection> {
    check(access, session)?;
    let fallback = match access {
        Access::AnyAuthenticated { login } | Access::Role(login) => View::login_for(login),
        Access::Public | Access::AnonymousOnly => View::Landing,
    };
    session
        .credential()
        .cloned()
        .ok_or(Rejection::Redirect(fallback))
}

/// Error notice for a failed section load. `generic` hides the server text.
pub(crate) fn load_failed(err: &ApiError, fallback: &str, generic: bool) -> Notice {
    debug!("section load failed: {err}");
    if generic {
        Notice::error(ERROR_TITLE, fallback)
    } else {
        Notice::from_api(ERROR_TITLE, err, fallback)
    }
}

/// Keeps a loaded section or falls back to its default, recording a notice.
pub(crate) fn section<T: Default>(
    result: Result<T, ApiError>,
    fallback: &str,
    generic: bool,
    notices: &mut Vec<Notice>,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            notices.push(load_failed(&err, fallback, generic));
            T::default()
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::api::ApiClient;
    use crate::session::{MemoryStore, SessionContext, ROLE_KEY, TOKEN_KEY};
    use std::net::TcpListener;
    use wiremock::MockServer;

    pub fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    pub fn client_for(server: &MockServer) -> anyhow::Result<ApiClient> {
        Ok(ApiClient::new(&format!("{}/api", server.uri()))?)
    }

    pub fn signed_in(role: &str) -> SessionContext<MemoryStore> {
        SessionContext::new(MemoryStore::with_entries([
            (TOKEN_KEY, "tok-123"),
            (ROLE_KEY, role),
        ]))
    }

    pub fn anonymous() -> SessionContext<MemoryStore> {
        SessionContext::new(MemoryStore::new())
    }

    pub fn book_json(id: &str, title: &str, author: &str, quantity: u32) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "title": title,
            "author": author,
            "description": "",
            "price": 10.0,
            "quantity": quantity,
            "status": "approved"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn require_redirects_anonymous_from_client_views() {
        let session = Session::anonymous();
        assert_eq!(
            require(View::MyBooks, &session),
            Err(Rejection::Redirect(View::ClientLogin))
        );
        assert_eq!(require(View::AvailableBooks, &session), Ok(()));
    }

    #[test]
    fn authorize_returns_credential() {
        let session = Session::from_raw(Some("tok".to_string()), Some("admin"));
        assert!(authorize(Access::Role(Role::Admin), &session).is_ok());
        assert_eq!(
            authorize(Access::Role(Role::Client), &session).err(),
            Some(Rejection::Redirect(View::ClientLogin))
        );
    }

    #[test]
    fn outcome_builders_accumulate() {
        let outcome = Outcome::new(1)
            .with_notice(Notice::info("a", "b"))
            .navigate_to(View::MyBooks)
            .map(|value| value + 1);
        assert_eq!(outcome.data, 2);
        assert_eq!(outcome.notices.len(), 1);
        assert_eq!(outcome.navigate, Some(View::MyBooks));
    }

    #[test]
    fn section_defaults_and_records_notice() {
        let mut notices = Vec::new();
        let value: Vec<u8> = section(
            Err(ApiError::Api {
                status: 500,
                message: Some("db down".to_string()),
            }),
            "Failed to fetch statistics",
            true,
            &mut notices,
        );
        assert!(value.is_empty());
        assert_eq!(notices[0].description, "Failed to fetch statistics");
    }
}
