pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::assertion::{IdentityAssertion, normalize_national_id};
pub use models::authority::Authority;
pub use models::principal::Principal;
pub use models::role::Role;
pub use models::user::{AuditFields, User};

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
