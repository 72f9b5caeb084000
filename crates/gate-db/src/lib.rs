pub mod error;
pub mod reconciler;
pub mod repositories;
pub mod store;

pub use error::{DbError, Result};
pub use reconciler::Reconciler;
pub use repositories::user_repository::SqliteUserRepository;
pub use store::UserStore;
