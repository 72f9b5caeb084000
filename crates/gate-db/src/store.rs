use crate::Result as DbErrorResult;

use gate_core::User;

use async_trait::async_trait;

/// Storage contract the reconciler runs against.
///
/// `save` is an upsert keyed by `id`; uniqueness of `username` and
/// `national_id` is the store's responsibility and surfaces as
/// `DbError::UniqueViolation`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>>;

    /// Lookup by the digits-only canonical form. Callers normalize before
    /// calling; raw identifiers never reach the store.
    async fn find_by_national_id(&self, national_id: &str) -> DbErrorResult<Option<User>>;

    async fn save(&self, user: &User) -> DbErrorResult<()>;
}
