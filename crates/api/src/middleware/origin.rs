//! Browser origin policy.
//!
//! The relay serves a fixed set of first-party frontends. Requests with no
//! `Origin` header (curl, native clients) pass through; browser requests
//! are checked against the explicit allow-list and the hosting-domain
//! suffix rule.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Whether a browser origin may use the API.
///
/// An origin is allowed when it ends with the configured hosting-domain
/// suffix or appears verbatim in the allow-list. The literal origin
/// `"null"` matches neither and is refused.
pub fn origin_allowed(origin: &str, config: &ServerConfig) -> bool {
    if !config.cors_origin_suffix.is_empty() && origin.ends_with(&config.cors_origin_suffix) {
        return true;
    }

    config.cors_origins.iter().any(|allowed| allowed == origin)
}

/// Refuse requests from disallowed origins with `403 {"error": ...}`.
///
/// Layered outermost so a refused request never reaches a route handler.
pub async fn origin_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(value) = request.headers().get(ORIGIN) else {
        return next.run(request).await;
    };

    let origin = value.to_str().unwrap_or("");
    if origin_allowed(origin, &state.config) {
        return next.run(request).await;
    }

    tracing::warn!(origin, "Refusing request from disallowed origin");

    (
        StatusCode::FORBIDDEN,
        axum::Json(json!({ "error": "Not allowed by CORS" })),
    )
        .into_response()
}
