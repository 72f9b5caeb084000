//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::app_state::AppState;

use gate_core::Principal;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts the principal attached to the request by the auth middleware.
///
/// Handlers behind the middleware always see one; a missing principal
/// means the route was wired outside the auth layer, which is a server
/// bug, reported as 401 rather than a panic.
pub struct CurrentPrincipal(pub Principal);

impl FromRequestParts<AppState> for CurrentPrincipal {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<Principal>()
                .cloned()
                .map(CurrentPrincipal)
                .ok_or_else(|| {
                    log::warn!("No principal on request; route not behind auth layer?");
                    ApiError::Unauthorized {
                        message: "Authentication required".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })
        }
    }
}
