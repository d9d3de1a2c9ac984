//! Application router.
//!
//! Wire surface, kept compatible with the clients that already exist:
//! trip bookings live under `/api/bookings` while every other route is
//! unprefixed, list endpoints return bare JSON arrays, and create
//! endpoints return the stored record (or a `{"message"}` body where
//! the legacy UI keys on the exact text).

use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Credential documents are scans, so multipart bodies get headroom
/// beyond axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Build the application router.
///
/// Browser clients call from another origin, so CORS allows any origin
/// for the methods the API serves.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/doctors", get(endpoints::doctors::list))
        .route("/doctors", post(endpoints::doctors::create))
        .route("/appointments", get(endpoints::appointments::list))
        .route("/appointments", post(endpoints::appointments::book))
        .route("/appointments/:id", delete(endpoints::appointments::remove))
        .route("/api/bookings", post(endpoints::bookings::create))
        .route("/uploads/:file", get(endpoints::uploads::serve))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(ctx)
}
