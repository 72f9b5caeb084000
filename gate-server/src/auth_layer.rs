//! Request authentication and authorization middleware.
//!
//! Order per request: public-rule bypass, bearer extraction, token
//! validation, claim normalization, reconciliation, policy evaluation.
//! The resolved principal rides the request as an extension; nothing here
//! touches ambient state.

use crate::ApiError;
use crate::app_state::AppState;

use gate_auth::{AuthError, Decision, Denial, extract_bearer};
use gate_core::Principal;
use gate_db::{Reconciler, SqliteUserRepository};

use std::panic::Location;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path().to_string();

    if matches!(state.policy.access_for(&path), gate_auth::Access::Public) {
        return Ok(next.run(request).await);
    }

    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let principal = build_principal(&state, header_value.as_deref()).await?;

    match state.policy.evaluate(&path, principal.as_ref()) {
        Decision::Allow => {
            if let Some(principal) = principal {
                request.extensions_mut().insert(principal);
            }
            Ok(next.run(request).await)
        }
        Decision::Deny(Denial::Unauthenticated) => Err(ApiError::Unauthorized {
            message: "Authentication required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        Decision::Deny(Denial::Forbidden) => Err(ApiError::Forbidden {
            message: "Insufficient authority".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Turn the Authorization header into a principal.
///
/// `Ok(None)` means "no verifiable token" and lets the policy produce the
/// unauthenticated denial. Incomplete claims still authenticate: the
/// caller proceeds without authority instead of being silently downgraded
/// to anonymous access.
async fn build_principal(
    state: &AppState,
    header_value: Option<&str>,
) -> Result<Option<Principal>, ApiError> {
    let token = match extract_bearer(header_value) {
        Ok(token) => token,
        Err(e) => {
            log::debug!("No usable bearer token: {}", e);
            return Ok(None);
        }
    };

    let claims = match state.jwt_validator.validate(token) {
        Ok(claims) => claims,
        Err(e) => {
            log::warn!("Token rejected: {}", e);
            return Ok(None);
        }
    };

    match claims.to_assertion() {
        Ok(assertion) => {
            let reconciler = Reconciler::new(SqliteUserRepository::new(state.pool.clone()));
            let (user_id, role) = reconciler.reconcile(&assertion).await?;

            log::debug!("Reconciled '{}' to user {}", assertion.username, user_id);

            Ok(Some(Principal::resolved(
                claims.sub,
                claims.azp,
                user_id,
                role,
                assertion.national_id,
            )))
        }
        Err(AuthError::IncompleteAssertion { claim, .. }) => {
            log::warn!(
                "Claims for '{}' missing '{}'; proceeding without authority",
                claims.sub,
                claim
            );
            Ok(Some(Principal::unprivileged(claims.sub, claims.azp)))
        }
        Err(e) => {
            log::warn!("Claim normalization failed: {}", e);
            Ok(Some(Principal::unprivileged(claims.sub, claims.azp)))
        }
    }
}
