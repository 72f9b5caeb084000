use crate::app_state::AppState;
use crate::{api, auth_layer, health};

use gate_auth::{Access, RoutePolicy};
use gate_config::CorsConfig;
use gate_core::{Authority, Role};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// The route table evaluated by the auth middleware.
///
/// First match wins, so the caller-specific `/api/users/me` precedes the
/// admin-only `/api/users`. Everything unlisted requires authentication.
pub fn default_policy() -> RoutePolicy {
    let admin = Authority::from_role(Role::Admin);

    RoutePolicy::new(Access::Authenticated)
        .route("/health", Access::Public)
        .route("/live", Access::Public)
        .route("/ready", Access::Public)
        .route("/api/users/me", Access::Authenticated)
        .route("/api/users", Access::Require(admin.clone()))
        .route("/api/admin", Access::Require(admin))
        .route("/api/pdf/*", Access::Authenticated)
}

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Authenticated endpoints
        .route("/api/hello", get(api::hello::hello))
        .route("/api/admin", get(api::hello::admin))
        .route("/api/users/me", get(api::users::users::current_user))
        .route("/api/users", get(api::users::users::list_users))
        .route("/api/pdf/generate", post(api::pdf::pdf::generate))
        .route(
            "/api/pdf/generate-from-url",
            post(api::pdf::pdf::generate_from_url),
        )
        // Authentication + authorization for everything above
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_layer::authenticate,
        ))
        // Add shared state
        .with_state(state)
        // CORS middleware from configuration
        .layer(cors_layer(cors))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    layer = if config.allow_any_origin() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    };

    layer = if config.allowed_methods.is_empty() {
        layer.allow_methods(Any)
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|method| method.parse().ok())
            .collect();
        layer.allow_methods(methods)
    };

    if config.allowed_headers.is_empty() {
        layer.allow_headers(Any)
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        layer.allow_headers(headers)
    }
}
