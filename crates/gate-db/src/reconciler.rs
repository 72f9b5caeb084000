//! Idempotent mapping from an identity assertion to a durable user record.
//!
//! No in-process locking coordinates concurrent reconciliations for the
//! same identity. Correctness under concurrency rests on the store's
//! unique constraints: a create that loses a first-creation race comes
//! back as `UniqueViolation` and is retried exactly once through the
//! update path.

use crate::store::UserStore;
use crate::{DbError, Result as DbErrorResult};

use gate_core::{IdentityAssertion, Role, User};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

pub struct Reconciler<S> {
    store: S,
}

impl<S: UserStore> Reconciler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the assertion to a record, creating or updating as needed,
    /// and return its id and current role.
    ///
    /// Repeated calls with the same assertion converge to the same id.
    /// Only profile fields are written on update; `role` is read back
    /// as-is.
    pub async fn reconcile(&self, assertion: &IdentityAssertion) -> DbErrorResult<(Uuid, Role)> {
        match self.lookup(assertion).await? {
            Some(mut user) => {
                user.apply_assertion(assertion);
                self.store.save(&user).await?;
                Ok((user.id, user.role))
            }
            None => self.create(assertion).await,
        }
    }

    /// National id is the stable key and takes precedence; username is the
    /// fallback when no national id is asserted or it matches nothing.
    async fn lookup(&self, assertion: &IdentityAssertion) -> DbErrorResult<Option<User>> {
        if let Some(national_id) = assertion.national_id.as_deref() {
            if let Some(user) = self.store.find_by_national_id(national_id).await? {
                return Ok(Some(user));
            }
        }
        self.store.find_by_username(&assertion.username).await
    }

    async fn create(&self, assertion: &IdentityAssertion) -> DbErrorResult<(Uuid, Role)> {
        let user = User::from_assertion(assertion);

        match self.store.save(&user).await {
            Ok(()) => Ok((user.id, user.role)),
            Err(DbError::UniqueViolation { .. }) => {
                // A concurrent first-seen request won the insert. The
                // record exists now; re-fetch once and take the update
                // path. The retried writer's profile values win.
                let mut existing = self.lookup(assertion).await?.ok_or_else(|| {
                    DbError::Reconciliation {
                        message: format!(
                            "conflicting create for '{}' but no record found on retry",
                            assertion.username
                        ),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;

                existing.apply_assertion(assertion);
                self.store.save(&existing).await?;
                Ok((existing.id, existing.role))
            }
            Err(e) => Err(e),
        }
    }
}
