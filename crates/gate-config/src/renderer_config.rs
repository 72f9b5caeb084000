use crate::{ConfigError, ConfigErrorResult, DEFAULT_RENDERER_TIMEOUT_SECS, DEFAULT_RENDERER_URL};

use serde::Deserialize;

/// Upstream document rendering service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_RENDERER_URL),
            timeout_secs: DEFAULT_RENDERER_TIMEOUT_SECS,
        }
    }
}

impl RendererConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.url.is_empty() {
            return Err(ConfigError::renderer("renderer.url cannot be empty"));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::renderer(format!(
                "renderer.url must be an http(s) URL, got {}",
                self.url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::renderer("renderer.timeout_secs must be > 0"));
        }

        Ok(())
    }
}
