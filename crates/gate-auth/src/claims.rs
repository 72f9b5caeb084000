use crate::{AuthError, Result as AuthErrorResult};

use gate_core::IdentityAssertion;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims as issued by the identity provider.
///
/// Signature and issuer verification happen before this struct is built;
/// everything here is already trusted content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (provider-side user id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Authorized party (client id)
    #[serde(default)]
    pub azp: Option<String>,
    /// Login name
    #[serde(default)]
    pub preferred_username: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// National identifier, custom claim; arrives in whatever format the
    /// provider stores it
    #[serde(default)]
    pub national_id: Option<String>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 128 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Reduce the claim set to an identity assertion, normalizing the
    /// national id on the way.
    ///
    /// `IncompleteAssertion` is not a hard authentication failure: callers
    /// keep the verified token and proceed without any authority rather
    /// than falling back to anonymous access.
    #[track_caller]
    pub fn to_assertion(&self) -> AuthErrorResult<IdentityAssertion> {
        let username = match self.preferred_username.as_deref() {
            Some(u) if !u.is_empty() => u,
            _ => {
                return Err(AuthError::IncompleteAssertion {
                    claim: "preferred_username",
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };
        let display_name = match self.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => {
                return Err(AuthError::IncompleteAssertion {
                    claim: "name",
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(IdentityAssertion::new(
            username.to_string(),
            display_name.to_string(),
            self.email.clone(),
            self.national_id.as_deref(),
        ))
    }
}
