use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    /// Page to render (required)
    pub url: String,
}
