//! Smoke-test endpoints for authenticated and admin callers.

use crate::CurrentPrincipal;

use axum::Json;
use serde_json::{Value, json};

/// GET /api/hello
pub async fn hello(CurrentPrincipal(principal): CurrentPrincipal) -> Json<Value> {
    Json(json!({
        "message": "Hello, authenticated user!",
        "subject": principal.subject,
        "client_id": principal.client_id,
    }))
}

/// GET /api/admin
///
/// Authority enforcement happens in the route policy; reaching this
/// handler already means ROLE_ADMIN.
pub async fn admin() -> Json<Value> {
    Json(json!({
        "message": "Admin only endpoint",
    }))
}
