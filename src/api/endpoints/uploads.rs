//! Uploaded file serving endpoint.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::api::types::ApiContext;
use crate::uploads;

/// `GET /uploads/:file` — serve a stored credential document.
///
/// Responds with the guessed MIME type and a plain-text 404 for
/// anything that does not resolve to a file inside the uploads
/// directory.
pub async fn serve(State(ctx): State<ApiContext>, Path(file): Path<String>) -> Response {
    let path = match uploads::resolve_upload(&ctx.uploads_dir, &file) {
        Some(p) => p,
        None => return (StatusCode::NOT_FOUND, "File not found").into_response(),
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path)
                .first_or_octet_stream()
                .to_string();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime)
                .header(header::CONTENT_LENGTH, bytes.len().to_string())
                .body(Body::from(bytes))
                .unwrap_or_else(|_| {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Response build failed").into_response()
                })
        }
        Err(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}
