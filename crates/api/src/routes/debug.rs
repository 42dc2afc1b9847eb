use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Diagnostic response: is the upstream credential configured, and how is
/// the server bound. Never exposes the key itself.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugResponse {
    /// Whether an upstream API key is configured.
    pub has_replicate_key: bool,
    /// Length of the configured key (0 when unset).
    pub key_length: usize,
    /// Configured bind port.
    pub port: u16,
    /// Current server time, ISO 8601.
    pub timestamp: String,
}

/// GET /debug -- credential and bind diagnostics.
async fn debug_info(State(state): State<AppState>) -> Json<DebugResponse> {
    let key = &state.config.replicate_api_key;

    Json(DebugResponse {
        has_replicate_key: !key.is_empty(),
        key_length: key.len(),
        port: state.config.port,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Mount the diagnostic route. Only merged into the app when
/// `DEBUG_ENDPOINT` is set; otherwise `/debug` answers 404 like any
/// unknown route.
pub fn router() -> Router<AppState> {
    Router::new().route("/debug", get(debug_info))
}
