use serde::Deserialize;

/// Browser cross-origin settings. Empty lists mean "allow any", which is
/// the development default; deployments narrow them in config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl CorsConfig {
    pub fn allow_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}
