//! Document rendering REST API handlers
//!
//! Stateless pass-through to the rendering upstream: the handlers forward
//! the input and hand the resulting bytes back without touching them.

use crate::ApiResult;
use crate::api::pdf::url_query::UrlQuery;
use crate::app_state::AppState;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;

/// POST /api/pdf/generate
///
/// Body is the raw HTML to render.
pub async fn generate(State(state): State<AppState>, html: String) -> ApiResult<Response> {
    let pdf = state.renderer.html_to_pdf(html).await?;

    Ok(pdf_response(pdf))
}

/// POST /api/pdf/generate-from-url?url=...
pub async fn generate_from_url(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> ApiResult<Response> {
    let pdf = state.renderer.url_to_pdf(&query.url).await?;

    Ok(pdf_response(pdf))
}

fn pdf_response(pdf: Bytes) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=document.pdf",
            ),
        ],
        pdf,
    )
        .into_response()
}
