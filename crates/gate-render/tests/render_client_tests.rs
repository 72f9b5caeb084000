//! Integration tests for the rendering client using wiremock mock server

use gate_config::RendererConfig;
use gate_render::{RenderClient, RenderError};

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header_exists, method, path},
};

fn config_for(server: &MockServer) -> RendererConfig {
    RendererConfig {
        url: server.uri(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_html_to_pdf_returns_upstream_bytes_unmodified() {
    let mock_server = MockServer::start().await;
    let pdf_bytes = b"%PDF-1.7 fake document".to_vec();

    Mock::given(method("POST"))
        .and(path("/forms/chromium/convert/html"))
        .and(header_exists("content-type"))
        .and(body_string_contains("index.html"))
        .and(body_string_contains("<h1>Hello</h1>"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(pdf_bytes.clone()))
        .mount(&mock_server)
        .await;

    let client = RenderClient::new(&config_for(&mock_server)).unwrap();
    let result = client.html_to_pdf("<h1>Hello</h1>".to_string()).await.unwrap();

    assert_eq!(result.as_ref(), pdf_bytes.as_slice());
}

#[tokio::test]
async fn test_url_to_pdf_sends_url_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/forms/chromium/convert/url"))
        .and(body_string_contains("https://example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF".to_vec()))
        .mount(&mock_server)
        .await;

    let client = RenderClient::new(&config_for(&mock_server)).unwrap();
    let result = client.url_to_pdf("https://example.com").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_upstream_error_status_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/forms/chromium/convert/html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = RenderClient::new(&config_for(&mock_server)).unwrap();
    let result = client.html_to_pdf("<p>x</p>".to_string()).await;

    assert!(matches!(
        result,
        Err(RenderError::Upstream { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_renderer_is_a_transport_error() {
    // Port 9 is discard; nothing listens there.
    let config = RendererConfig {
        url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
    };

    let client = RenderClient::new(&config).unwrap();
    let result = client.html_to_pdf("<p>x</p>".to_string()).await;

    assert!(matches!(result, Err(RenderError::Http { .. })));
}
