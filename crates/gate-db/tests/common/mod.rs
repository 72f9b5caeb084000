#![allow(dead_code)]

//! Shared fixtures for gate-db integration tests.

use gate_db::{DbError, Result as DbErrorResult, UserStore};

use gate_core::{IdentityAssertion, User};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn assertion(username: &str, display_name: &str, national_id: Option<&str>) -> IdentityAssertion {
    IdentityAssertion::new(
        username.to_string(),
        display_name.to_string(),
        Some(format!("{}@example.com", username)),
        national_id,
    )
}

fn unique_violation(constraint: &str) -> DbError {
    DbError::UniqueViolation {
        message: format!("UNIQUE constraint failed: {}", constraint),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// In-memory store that can lose a first-creation race on demand.
///
/// `arm_race` queues a competitor record: the next save of an unseen id
/// inserts the competitor instead and reports a unique violation, exactly
/// what a concurrent writer winning the insert looks like through the
/// store contract. `arm_phantom_conflict` reports the violation without
/// inserting anything, to exercise the retry bound.
pub struct RacingStore {
    users: Mutex<HashMap<Uuid, User>>,
    competitor: Mutex<Option<User>>,
    phantom_conflict: Mutex<bool>,
}

impl RacingStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            competitor: Mutex::new(None),
            phantom_conflict: Mutex::new(false),
        }
    }

    pub fn arm_race(&self, competitor: User) {
        *self.competitor.lock().unwrap() = Some(competitor);
    }

    pub fn arm_phantom_conflict(&self) {
        *self.phantom_conflict.lock().unwrap() = true;
    }

    pub fn record_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }
}

#[async_trait]
impl UserStore for RacingStore {
    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_national_id(&self, national_id: &str) -> DbErrorResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.national_id.as_deref() == Some(national_id))
            .cloned())
    }

    async fn save(&self, user: &User) -> DbErrorResult<()> {
        let mut users = self.users.lock().unwrap();

        let is_create = !users.contains_key(&user.id);
        if is_create {
            let mut phantom = self.phantom_conflict.lock().unwrap();
            if *phantom {
                *phantom = false;
                return Err(unique_violation("users.username"));
            }
            drop(phantom);

            if let Some(competitor) = self.competitor.lock().unwrap().take() {
                users.insert(competitor.id, competitor);
                return Err(unique_violation("users.username"));
            }

            if users.values().any(|u| u.username == user.username) {
                return Err(unique_violation("users.username"));
            }
            if user.national_id.is_some()
                && users
                    .values()
                    .any(|u| u.national_id == user.national_id)
            {
                return Err(unique_violation("users.national_id"));
            }
        }

        users.insert(user.id, user.clone());
        Ok(())
    }
}
