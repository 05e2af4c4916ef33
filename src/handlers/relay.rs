use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// Body of a load-more request: the `next_page` URL the CMS handed out
/// with the previous page.
#[derive(Debug, Deserialize)]
pub struct LoadMoreRequest {
    pub url: String,
}

/// Forwards a cursor URL to the CMS with the access token attached
/// server-side, and hands the JSON body back untouched.
pub async fn load_more(
    State(state): State<SharedState>,
    Json(request): Json<LoadMoreRequest>,
) -> Result<Response, AppError> {
    // Only cursors into our own repository get the token appended
    if !state.prismic.is_same_repository(&request.url) {
        return Err(AppError::BadRequest(
            "URL does not target the content repository".to_string(),
        ));
    }

    let body = state
        .prismic
        .fetch_page_raw(&request.url)
        .await
        .map_err(AppError::Upstream)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Everything except POST lands here.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        "Method not allowed",
    )
}
