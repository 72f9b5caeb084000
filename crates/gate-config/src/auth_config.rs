use crate::{ConfigError, ConfigErrorResult};

use std::path::Path;

use serde::Deserialize;

/// Token verification settings. Exactly one key source must be configured:
/// a shared HS256 secret or a path to an RS256 public key PEM.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    /// Relative to the config directory.
    pub jwt_public_key_path: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
            )),
            (Some(secret), None) => {
                if secret.len() < 32 {
                    return Err(ConfigError::auth(
                        "auth.jwt_secret must be at least 32 bytes",
                    ));
                }
                Ok(())
            }
            (None, Some(key_path)) => {
                let full_path = config_dir.join(key_path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path does not exist: {}",
                        full_path.display()
                    )));
                }
                Ok(())
            }
        }
    }
}
