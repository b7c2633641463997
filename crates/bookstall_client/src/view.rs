//! Every view of the marketplace with its path and access rule, plus the
//! navigation actions visible to each principal.

use crate::role::{Principal, Role};
use std::fmt;

/// Who may enter a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Only without a session, like the landing page.
    AnonymousOnly,
    /// Any recognized role. `login` is where anonymous visitors are sent.
    AnyAuthenticated { login: Role },
    Role(Role),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    AvailableBooks,
    AdminLogin,
    AdminSignup,
    AdminDashboard,
    ClientLogin,
    ClientSignup,
    ClientDashboard,
    SellBook,
    MyBooks,
}

impl View {
    pub const ALL: [Self; 10] = [
        Self::Landing,
        Self::AvailableBooks,
        Self::AdminLogin,
        Self::AdminSignup,
        Self::AdminDashboard,
        Self::ClientLogin,
        Self::ClientSignup,
        Self::ClientDashboard,
        Self::SellBook,
        Self::MyBooks,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::AvailableBooks => "/books",
            Self::AdminLogin => "/admin/login",
            Self::AdminSignup => "/admin/signup",
            Self::AdminDashboard => "/admin/dashboard",
            Self::ClientLogin => "/client/login",
            Self::ClientSignup => "/client/signup",
            Self::ClientDashboard => "/client/dashboard",
            Self::SellBook => "/sell-book",
            Self::MyBooks => "/my-books",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => "DK Book Stall",
            Self::AvailableBooks => "Available Books",
            Self::AdminLogin => "Admin Login",
            Self::AdminSignup => "Admin Signup",
            Self::AdminDashboard => "Admin Dashboard",
            Self::ClientLogin => "Client Login",
            Self::ClientSignup => "Client Signup",
            Self::ClientDashboard => "Client Dashboard",
            Self::SellBook => "Sell Your Book",
            Self::MyBooks => "My Books",
        }
    }

    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Self::Landing => Access::AnonymousOnly,
            Self::AvailableBooks
            | Self::AdminLogin
            | Self::AdminSignup
            | Self::ClientLogin
            | Self::ClientSignup => Access::Public,
            Self::AdminDashboard => Access::Role(Role::Admin),
            Self::ClientDashboard | Self::SellBook | Self::MyBooks => {
                Access::AnyAuthenticated { login: Role::Client }
            }
        }
    }

    /// Resolves a location path. A single trailing slash is tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let normalized = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        Self::ALL.into_iter().find(|view| view.path() == normalized)
    }

    #[must_use]
    pub const fn login_for(role: Role) -> Self {
        match role {
            Role::Client => Self::ClientLogin,
            Role::Admin => Self::AdminLogin,
        }
    }

    #[must_use]
    pub const fn signup_for(role: Role) -> Self {
        match role {
            Role::Client => Self::ClientSignup,
            Role::Admin => Self::AdminSignup,
        }
    }

    /// Where login lands.
    #[must_use]
    pub const fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Client => Self::ClientDashboard,
            Role::Admin => Self::AdminDashboard,
        }
    }

    /// Where an authenticated visitor of the landing page is sent.
    #[must_use]
    pub const fn home_for(role: Role) -> Self {
        match role {
            Role::Client => Self::AvailableBooks,
            Role::Admin => Self::AdminDashboard,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.path())
    }
}

/// What a navigation entry does when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Go(View),
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAction {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavAction {
    const fn go(label: &'static str, view: View) -> Self {
        Self {
            label,
            target: NavTarget::Go(view),
        }
    }

    const fn logout() -> Self {
        Self {
            label: "Logout",
            target: NavTarget::Logout,
        }
    }
}

/// Contents of the navigation bar for the current view and principal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBar {
    pub brand: View,
    pub actions: Vec<NavAction>,
}

/// Navigation bar for `current`, or `None` where it is hidden (landing).
#[must_use]
pub fn nav_bar(current: View, principal: Principal) -> Option<NavBar> {
    if current == View::Landing {
        return None;
    }
    let brand = match principal {
        Principal::Authenticated(Role::Admin) => View::AdminDashboard,
        _ => View::ClientDashboard,
    };
    Some(NavBar {
        brand,
        actions: nav_actions(principal),
    })
}

/// Navigation actions visible to `principal`.
#[must_use]
pub fn nav_actions(principal: Principal) -> Vec<NavAction> {
    match principal {
        Principal::Anonymous => vec![
            NavAction::go("Login", View::ClientLogin),
            NavAction::go("Sign Up", View::ClientSignup),
        ],
        Principal::Authenticated(Role::Client) => vec![
            NavAction::go("Dashboard", View::ClientDashboard),
            NavAction::go("Browse Books", View::AvailableBooks),
            NavAction::go("Sell Book", View::SellBook),
            NavAction::go("My Books", View::MyBooks),
            NavAction::logout(),
        ],
        Principal::Authenticated(Role::Admin) => vec![
            NavAction::go("Dashboard", View::AdminDashboard),
            NavAction::logout(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_back_to_views() {
        for view in View::ALL {
            assert_eq!(View::from_path(view.path()), Some(view));
        }
    }

    #[test]
    fn from_path_tolerates_trailing_slash() {
        assert_eq!(View::from_path("/my-books/"), Some(View::MyBooks));
        assert_eq!(View::from_path("/"), Some(View::Landing));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert_eq!(View::from_path("/books/my-books"), None);
        assert_eq!(View::from_path("/admin"), None);
        assert_eq!(View::from_path(""), None);
    }

    #[test]
    fn per_role_targets() {
        assert_eq!(View::login_for(Role::Admin), View::AdminLogin);
        assert_eq!(View::login_for(Role::Client), View::ClientLogin);
        assert_eq!(View::home_for(Role::Admin), View::AdminDashboard);
        assert_eq!(View::home_for(Role::Client), View::AvailableBooks);
        assert_eq!(View::dashboard_for(Role::Client), View::ClientDashboard);
        assert_eq!(View::signup_for(Role::Admin), View::AdminSignup);
    }

    #[test]
    fn nav_hidden_on_landing() {
        assert_eq!(nav_bar(View::Landing, Principal::Anonymous), None);
        assert_eq!(
            nav_bar(View::Landing, Principal::Authenticated(Role::Client)),
            None
        );
    }

    #[test]
    fn nav_for_client() {
        let bar = nav_bar(View::MyBooks, Principal::Authenticated(Role::Client));
        let Some(bar) = bar else {
            panic!("nav bar should be visible");
        };
        assert_eq!(bar.brand, View::ClientDashboard);
        let labels: Vec<_> = bar.actions.iter().map(|action| action.label).collect();
        assert_eq!(
            labels,
            ["Dashboard", "Browse Books", "Sell Book", "My Books", "Logout"]
        );
    }

    #[test]
    fn nav_for_admin() {
        let actions = nav_actions(Principal::Authenticated(Role::Admin));
        assert_eq!(
            actions,
            vec![
                NavAction::go("Dashboard", View::AdminDashboard),
                NavAction::logout()
            ]
        );
        let bar = nav_bar(View::AdminDashboard, Principal::Authenticated(Role::Admin));
        assert_eq!(bar.map(|bar| bar.brand), Some(View::AdminDashboard));
    }

    #[test]
    fn nav_for_anonymous_offers_login_and_signup() {
        let actions = nav_actions(Principal::Anonymous);
        assert_eq!(
            actions,
            vec![
                NavAction::go("Login", View::ClientLogin),
                NavAction::go("Sign Up", View::ClientSignup)
            ]
        );
    }
}
