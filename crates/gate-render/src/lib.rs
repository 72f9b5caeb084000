pub mod client;
pub mod error;

pub use client::RenderClient;
pub use error::{RenderError, Result};
