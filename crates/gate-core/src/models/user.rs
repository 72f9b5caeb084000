//! User entity - the durable identity record behind every reconciled caller.

use crate::{IdentityAssertion, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Creation/modification metadata carried by the entity as a value, not
/// inherited behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_by: String,
}

impl AuditFields {
    pub fn new(actor: &str) -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            created_by: actor.to_string(),
            updated_by: actor.to_string(),
        }
    }

    pub fn touch(&mut self, actor: &str) {
        self.updated_at = Utc::now();
        self.updated_by = actor.to_string();
    }
}

/// A user record. `id` is assigned once at creation and never reassigned;
/// `username` and `national_id` are unique at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Identity-provider login name. Mutable: overwritten on every
    /// reconciliation with the asserted value.
    pub username: String,
    pub display_name: String,
    pub email: Option<String>,
    /// Digits-only canonical form, unique among non-null values.
    pub national_id: Option<String>,
    pub role: Role,
    pub audit: AuditFields,
}

impl User {
    /// Create a fresh record from an assertion. Role always starts as
    /// `User` regardless of what the token carried.
    pub fn from_assertion(assertion: &IdentityAssertion) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: assertion.username.clone(),
            display_name: assertion.display_name.clone(),
            email: assertion.email.clone(),
            national_id: assertion.national_id.clone(),
            role: Role::User,
            audit: AuditFields::new(&assertion.username),
        }
    }

    /// Overwrite the mutable profile fields with the asserted values.
    /// `id` and `role` are never touched here.
    pub fn apply_assertion(&mut self, assertion: &IdentityAssertion) {
        self.username = assertion.username.clone();
        self.display_name = assertion.display_name.clone();
        self.email = assertion.email.clone();
        self.national_id = assertion.national_id.clone();
        self.audit.touch(&assertion.username);
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
