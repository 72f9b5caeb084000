pub mod assertion;
pub mod authority;
pub mod principal;
pub mod role;
pub mod user;
