//! SQLite-backed user store.
//!
//! Uniqueness of `username` and `national_id` is enforced by the indexes in
//! the migration, not by application-level checks; concurrent writers rely
//! on the constraint to detect each other.

use crate::store::UserStore;
use crate::{DbError, Result as DbErrorResult};

use gate_core::{AuditFields, Role, User};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All records, ordered by creation time. Used by the administrative
    /// listing, not by reconciliation.
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
                SELECT id, username, display_name, email, national_id, role,
                    created_at, updated_at, created_by, updated_by
                FROM users
                ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|row| map_user(&row)).collect()
    }

    async fn find_one(&self, column: &str, value: &str) -> DbErrorResult<Option<User>> {
        let sql = format!(
            r#"
                SELECT id, username, display_name, email, national_id, role,
                    created_at, updated_at, created_by, updated_by
                FROM users
                WHERE {} = ?
            "#,
            column
        );

        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_user(&r)).transpose()
    }
}

#[async_trait]
impl UserStore for SqliteUserRepository {
    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        self.find_one("username", username).await
    }

    async fn find_by_national_id(&self, national_id: &str) -> DbErrorResult<Option<User>> {
        self.find_one("national_id", national_id).await
    }

    async fn save(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let role = user.role.as_str();
        let created_at = user.audit.created_at.timestamp();
        let updated_at = user.audit.updated_at.timestamp();

        // Upsert keyed by id. Role is written once at creation and left
        // alone on conflict: the reconciliation path may only touch
        // profile fields.
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, username, display_name, email, national_id, role,
                    created_at, updated_at, created_by, updated_by
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    username = excluded.username,
                    display_name = excluded.display_name,
                    email = excluded.email,
                    national_id = excluded.national_id,
                    updated_at = excluded.updated_at,
                    updated_by = excluded.updated_by
            "#,
        )
        .bind(&id)
        .bind(&user.username)
        .bind(&user.display_name)
        .bind(&user.email)
        .bind(&user.national_id)
        .bind(role)
        .bind(created_at)
        .bind(updated_at)
        .bind(&user.audit.created_by)
        .bind(&user.audit.updated_by)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn map_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id_str: String = row.try_get("id").map_err(DbError::from)?;
    let role_str: String = row.try_get("role").map_err(DbError::from)?;
    let created_at: i64 = row.try_get("created_at").map_err(DbError::from)?;
    let updated_at: i64 = row.try_get("updated_at").map_err(DbError::from)?;

    Ok(User {
        id: Uuid::parse_str(&id_str).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        username: row.try_get("username").map_err(DbError::from)?,
        display_name: row.try_get("display_name").map_err(DbError::from)?,
        email: row.try_get("email").map_err(DbError::from)?,
        national_id: row.try_get("national_id").map_err(DbError::from)?,
        role: Role::from_str(&role_str).map_err(|e| DbError::Initialization {
            message: format!("Invalid role in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        audit: AuditFields {
            created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            created_by: row.try_get("created_by").map_err(DbError::from)?,
            updated_by: row.try_get("updated_by").map_err(DbError::from)?,
        },
    })
}
