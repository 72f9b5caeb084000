//! User REST API handlers

use crate::app_state::AppState;
use crate::{ApiError, ApiResult, CurrentPrincipal, UserDto, UserListResponse, UserResponse};

use gate_db::{SqliteUserRepository, UserStore};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// GET /api/users/me
///
/// The caller's own record, keyed by their resolved national id. A caller
/// whose token carries no national id gets a not-found, not somebody
/// else's record.
pub async fn current_user(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> ApiResult<Json<UserResponse>> {
    let national_id = principal.national_id.ok_or_else(|| ApiError::NotFound {
        message: "No user record for caller".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let repo = SqliteUserRepository::new(state.pool.clone());
    let user = repo
        .find_by_national_id(&national_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "No user record for caller".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// GET /api/users
///
/// List all users. Admin-only per the route policy.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let repo = SqliteUserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}
