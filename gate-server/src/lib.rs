pub mod api;
pub mod app_state;
pub mod auth_layer;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::principal::CurrentPrincipal,
    users::{user_dto::UserDto, user_list_response::UserListResponse, user_response::UserResponse},
};

pub use crate::app_state::AppState;
pub use crate::routes::{build_router, default_policy};
