use gate_auth::{JwtValidator, RoutePolicy};
use gate_render::RenderClient;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared per-request dependencies.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub policy: Arc<RoutePolicy>,
    pub renderer: Arc<RenderClient>,
}
