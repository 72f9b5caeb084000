use crate::Role;

use serde::Serialize;

/// The single canonical authority token derived from a user's role.
///
/// The model is one authority per user, not a permission set. Callers that
/// need multiple simultaneous authorities must change this contract (and the
/// policy evaluator with it) rather than widening it silently.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Authority(String);

impl Authority {
    pub fn from_role(role: Role) -> Self {
        Self(format!("ROLE_{}", role.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Authority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
