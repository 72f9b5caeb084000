//! Client for the external document rendering service.
//!
//! Stateless pass-through: the request is forwarded as a multipart form
//! and the response body comes back untouched. No retries, no caching,
//! no inspection of the rendered bytes.

use crate::{RenderError, Result as RenderResult};

use std::panic::Location;
use std::time::Duration;

use bytes::Bytes;
use error_location::ErrorLocation;
use gate_config::RendererConfig;
use reqwest::multipart::{Form, Part};

pub struct RenderClient {
    http: reqwest::Client,
    base_url: String,
}

impl RenderClient {
    #[track_caller]
    pub fn new(config: &RendererConfig) -> RenderResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RenderError::Setup {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Render raw HTML. The markup travels as a file part named
    /// `index.html`, which is the entry point the renderer expects.
    pub async fn html_to_pdf(&self, html: String) -> RenderResult<Bytes> {
        let part = Part::bytes(html.into_bytes())
            .file_name("index.html")
            .mime_str("text/html")
            .map_err(|e| RenderError::Setup {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let form = Form::new().part("files", part);

        self.convert("/forms/chromium/convert/html", form).await
    }

    /// Render the page behind a URL.
    pub async fn url_to_pdf(&self, url: &str) -> RenderResult<Bytes> {
        let form = Form::new().text("url", url.to_string());

        self.convert("/forms/chromium/convert/url", form).await
    }

    async fn convert(&self, path: &str, form: Form) -> RenderResult<Bytes> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| RenderError::Http {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Upstream {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        response.bytes().await.map_err(|e| RenderError::Http {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
