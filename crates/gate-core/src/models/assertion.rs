//! The normalized subset of token claims used for reconciliation.

use serde::{Deserialize, Serialize};

/// Identity asserted by a verified bearer token, reduced to the fields the
/// reconciler matches and stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAssertion {
    pub username: String,
    pub display_name: String,
    pub email: Option<String>,
    /// Digits-only canonical form. Normalized at construction so no raw
    /// representation ever reaches a repository lookup or write.
    pub national_id: Option<String>,
}

impl IdentityAssertion {
    pub fn new(
        username: String,
        display_name: String,
        email: Option<String>,
        national_id: Option<&str>,
    ) -> Self {
        Self {
            username,
            display_name,
            email,
            national_id: national_id.and_then(normalize_national_id),
        }
    }
}

/// Strip every non-digit character from a raw national identifier.
///
/// Deterministic: equal raw inputs always produce equal output. An input
/// with no digits at all normalizes to `None`.
pub fn normalize_national_id(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() { None } else { Some(digits) }
}
