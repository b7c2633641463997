//! Pre-render access check. Views call `enter` before doing anything else and
//! only proceed on `Guard::Allow`. This is a UX gate; the API enforces the
//! real authorization.

use crate::role::Principal;
use crate::session::Session;
use crate::view::{Access, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Allow,
    RedirectTo(View),
}

impl Guard {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decides entry for `access`. Only a recognized role counts as
/// authenticated here, so a credential with an unknown role tag is treated
/// as no session.
#[must_use]
pub fn guard(access: Access, principal: Principal) -> Guard {
    match (access, principal) {
        (Access::Public, _)
        | (Access::AnonymousOnly, Principal::Anonymous)
        | (Access::AnyAuthenticated { .. }, Principal::Authenticated(_)) => Guard::Allow,
        (Access::AnonymousOnly, Principal::Authenticated(role)) => {
            Guard::RedirectTo(View::home_for(role))
        }
        (Access::AnyAuthenticated { login }, Principal::Anonymous) => {
            Guard::RedirectTo(View::login_for(login))
        }
        (Access::Role(required), principal) => {
            if principal == Principal::Authenticated(required) {
                Guard::Allow
            } else {
                Guard::RedirectTo(View::login_for(required))
            }
        }
    }
}

/// Guard for entering `view` with the given session snapshot.
#[must_use]
pub fn enter(view: View, session: &Session) -> Guard {
    guard(view.access(), session.role_of())
}
