use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Renderer request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Renderer returned status {status} {location}")]
    Upstream {
        status: u16,
        location: ErrorLocation,
    },

    #[error("Renderer client setup failed: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
