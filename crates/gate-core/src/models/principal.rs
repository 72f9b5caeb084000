use crate::{Authority, Role};

use uuid::Uuid;

/// The reconciled caller, threaded explicitly through the request rather
/// than held in ambient state.
///
/// A principal always represents a verified token. `user_id` and
/// `authority` are present only when the claims were complete enough to
/// reconcile; an incomplete claim set still authenticates, but grants
/// nothing.
#[derive(Debug, Clone)]
pub struct Principal {
    /// Token subject.
    pub subject: String,
    /// Authorized party (`azp`) claim, when the issuer provides one.
    pub client_id: Option<String>,
    pub user_id: Option<Uuid>,
    pub authority: Option<Authority>,
    /// The caller's normalized national id, used to key current-user
    /// lookups.
    pub national_id: Option<String>,
}

impl Principal {
    /// Authenticated caller whose claims could not be reconciled.
    pub fn unprivileged(subject: String, client_id: Option<String>) -> Self {
        Self {
            subject,
            client_id,
            user_id: None,
            authority: None,
            national_id: None,
        }
    }

    /// Caller resolved to a user record.
    pub fn resolved(
        subject: String,
        client_id: Option<String>,
        user_id: Uuid,
        role: Role,
        national_id: Option<String>,
    ) -> Self {
        Self {
            subject,
            client_id,
            user_id: Some(user_id),
            authority: Some(Authority::from_role(role)),
            national_id,
        }
    }

    pub fn has_authority(&self, required: &Authority) -> bool {
        self.authority.as_ref() == Some(required)
    }
}
