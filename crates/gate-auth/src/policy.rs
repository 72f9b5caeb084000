//! Declarative route authorization.
//!
//! The policy is a plain table of `(pattern, access)` rules evaluated
//! first-match, top to bottom. Order the table most-specific-first; the
//! first matching rule wins and evaluation never falls through to a later
//! one, so the outcome for a given `(path, principal)` pair is a pure
//! function of the table.

use gate_core::{Authority, Principal};

/// Access requirement for a group of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// No authentication at all (health/probe style endpoints).
    Public,
    /// Any caller with a verified token, authority or not.
    Authenticated,
    /// A caller holding exactly this authority.
    Require(Authority),
}

#[derive(Debug, Clone)]
struct RouteRule {
    pattern: String,
    access: Access,
}

/// Why a request was denied. Distinguished so the boundary can map
/// missing-credentials to 401 and insufficient-authority to 403.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    Unauthenticated,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denial),
}

#[derive(Debug, Clone)]
pub struct RoutePolicy {
    rules: Vec<RouteRule>,
    /// Applied when no rule matches.
    fallback: Access,
}

impl RoutePolicy {
    pub fn new(fallback: Access) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule. `pattern` is an exact path, or a prefix when it ends
    /// with `/*`.
    pub fn route(mut self, pattern: &str, access: Access) -> Self {
        self.rules.push(RouteRule {
            pattern: pattern.to_string(),
            access,
        });
        self
    }

    /// The access requirement for a path: first matching rule, else the
    /// fallback.
    pub fn access_for(&self, path: &str) -> &Access {
        self.rules
            .iter()
            .find(|rule| Self::matches(&rule.pattern, path))
            .map(|rule| &rule.access)
            .unwrap_or(&self.fallback)
    }

    /// Decide whether `principal` may reach `path`. `None` means the
    /// request carried no verifiable token.
    pub fn evaluate(&self, path: &str, principal: Option<&Principal>) -> Decision {
        match self.access_for(path) {
            Access::Public => Decision::Allow,
            Access::Authenticated => match principal {
                Some(_) => Decision::Allow,
                None => Decision::Deny(Denial::Unauthenticated),
            },
            Access::Require(authority) => match principal {
                None => Decision::Deny(Denial::Unauthenticated),
                Some(p) if p.has_authority(authority) => Decision::Allow,
                Some(_) => Decision::Deny(Denial::Forbidden),
            },
        }
    }

    fn matches(pattern: &str, path: &str) -> bool {
        match pattern.strip_suffix("/*") {
            Some(prefix) => path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
            None => pattern == path,
        }
    }
}
