#![allow(dead_code)]

//! Test infrastructure for gate-server API tests

use gate_auth::{Claims, JwtValidator};
use gate_config::{CorsConfig, RendererConfig};
use gate_render::RenderClient;
use gate_server::app_state::AppState;
use gate_server::default_policy;

use std::sync::Arc;

use axum::Router;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/gate-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, pointing the renderer at `renderer_url`.
pub async fn create_test_state_with_renderer(renderer_url: &str) -> AppState {
    let renderer_config = RendererConfig {
        url: renderer_url.to_string(),
        timeout_secs: 5,
    };

    AppState {
        pool: create_test_pool().await,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        policy: Arc::new(default_policy()),
        renderer: Arc::new(RenderClient::new(&renderer_config).expect("renderer client")),
    }
}

/// Create AppState for tests that never reach the renderer.
pub async fn create_test_state() -> AppState {
    // Port 9 is discard; nothing listens there.
    create_test_state_with_renderer("http://127.0.0.1:9").await
}

pub fn build_test_router(state: AppState) -> Router {
    gate_server::build_router(state, &CorsConfig::default())
}

pub fn claims_for(username: Option<&str>, name: Option<&str>, national_id: Option<&str>) -> Claims {
    Claims {
        sub: "sub-test-user".to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
        azp: Some("webapp".to_string()),
        preferred_username: username.map(str::to_string),
        name: name.map(str::to_string),
        email: username.map(|u| format!("{}@example.com", u)),
        national_id: national_id.map(str::to_string),
    }
}

pub fn mint_token(claims: &Claims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("token encoding")
}

/// Token for a complete, reconcilable identity.
pub fn token_for(username: &str, name: &str, national_id: Option<&str>) -> String {
    mint_token(&claims_for(Some(username), Some(name), national_id))
}

/// Role promotion is an administrative action; tests apply it directly.
pub async fn promote_to_admin(pool: &SqlitePool, username: &str) {
    sqlx::query("UPDATE users SET role = 'ADMIN' WHERE username = ?")
        .bind(username)
        .execute(pool)
        .await
        .expect("Failed to promote user");
}
