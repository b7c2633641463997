use std::fmt;

/// Account kind a session was opened for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Client,
    Admin,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Client, Self::Admin];

    /// Tag written to the session store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }

    /// Parses a stored tag. Anything other than the exact tags is no role.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "client" => Some(Self::Client),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who the current session speaks for, as seen by the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Principal {
    Anonymous,
    Authenticated(Role),
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("anonymous"),
            Self::Authenticated(role) => role.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_exact_tags() {
        assert_eq!(Role::parse("client"), Some(Role::Client));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(" client"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn tags_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn principal_display() {
        assert_eq!(Principal::Anonymous.to_string(), "anonymous");
        assert_eq!(Principal::Authenticated(Role::Admin).to_string(), "admin");
    }
}
