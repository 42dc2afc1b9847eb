use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::Deserialize;
use tunesmith_core::{Model, MusicgenParams, RiffusionParams, MUSICGEN_VERSION, RIFFUSION_VERSION};
use tunesmith_replicate::poll::poll_until_terminal;
use tunesmith_replicate::prediction::Prediction;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /api/generate-audio`. Everything except `prompt` is
/// optional; tuning fields are coerced and defaulted by
/// [`MusicgenParams`].
#[derive(Debug, Deserialize)]
pub struct GenerateAudioRequest {
    pub prompt: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(flatten)]
    pub params: MusicgenParams,
}

fn default_model() -> String {
    "musicgen".to_string()
}

/// Body of `POST /api/riffusion-generate`. Only `prompt` is required.
#[derive(Debug, Deserialize)]
pub struct RiffusionGenerateRequest {
    pub prompt: String,
    #[serde(flatten)]
    pub params: RiffusionParams,
}

/// POST /api/generate-audio -- submit a MusicGen prediction with the
/// synchronous-wait hint and return the upstream response verbatim.
///
/// The model selector is validated against the catalog before anything is
/// sent upstream; this route always submits the MusicGen backend.
async fn generate_audio(
    State(state): State<AppState>,
    Json(request): Json<GenerateAudioRequest>,
) -> AppResult<Json<Prediction>> {
    let model = Model::parse(&request.model)?;

    tracing::info!(
        model = model.as_str(),
        prompt_chars = request.prompt.len(),
        "Submitting MusicGen prediction"
    );

    let input = request.params.to_input(&request.prompt);
    let prediction = state
        .replicate
        .create_prediction(MUSICGEN_VERSION, &input, true)
        .await?;

    tracing::info!(
        id = prediction.id.as_deref().unwrap_or("<none>"),
        status = ?prediction.status,
        "MusicGen submit returned"
    );

    Ok(Json(prediction))
}

/// POST /api/riffusion-generate -- submit a Riffusion prediction, poll it
/// to a terminal state, and return the normalized result.
async fn riffusion_generate(
    State(state): State<AppState>,
    Json(request): Json<RiffusionGenerateRequest>,
) -> AppResult<Json<Prediction>> {
    tracing::info!(
        prompt_chars = request.prompt.len(),
        "Submitting Riffusion prediction"
    );

    let input = request.params.to_input(&request.prompt);
    let submitted = state
        .replicate
        .create_prediction(RIFFUSION_VERSION, &input, false)
        .await?;

    let id = submitted.id.clone().ok_or(AppError::SubmitFailed)?;

    let mut prediction =
        poll_until_terminal(&state.replicate, &id, submitted, &state.poll).await?;
    prediction.normalize_output();

    tracing::info!(%id, status = ?prediction.status, "Riffusion prediction finished");

    Ok(Json(prediction))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-audio", post(generate_audio))
        .route("/riffusion-generate", post(riffusion_generate))
}
