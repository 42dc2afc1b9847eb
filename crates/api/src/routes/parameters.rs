use axum::{routing::get, Json, Router};
use serde::Serialize;
use tunesmith_core::{Model, MusicgenParams, ALLOWED_MODELS, MUSICGEN_VERSION};

use crate::state::AppState;

/// The model catalog and tuning defaults, published so frontends can build
/// their controls without hardcoding values.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametersResponse {
    pub available_models: &'static [&'static str],
    pub default_model: &'static str,
    pub parameters: DefaultParameters,
}

/// The MusicGen backend version plus every tuning default, flattened into
/// one object keyed by upstream field names.
#[derive(Serialize)]
pub struct DefaultParameters {
    pub version: &'static str,
    #[serde(flatten)]
    pub defaults: MusicgenParams,
}

/// GET /api/parameters -- allowed models and tuning defaults.
async fn list_parameters() -> Json<ParametersResponse> {
    Json(ParametersResponse {
        available_models: ALLOWED_MODELS,
        default_model: Model::default().as_str(),
        parameters: DefaultParameters {
            version: MUSICGEN_VERSION,
            defaults: MusicgenParams::default(),
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/parameters", get(list_parameters))
}
