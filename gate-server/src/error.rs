use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] gate_config::ConfigError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Auth setup error: {0}")]
    Auth(#[from] gate_auth::AuthError),

    #[error("Renderer setup error: {0}")]
    Render(#[from] gate_render::RenderError),

    #[error("Logging setup error: {message}")]
    Logging { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
