use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tunesmith_core::error::CoreError;
use tunesmith_replicate::client::ReplicateError;
use tunesmith_replicate::poll::PollError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and upstream error types and implements
/// [`IntoResponse`] to produce the relay's uniform `{"error": <message>}`
/// JSON error body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tunesmith_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An upstream transport failure or non-2xx response.
    #[error(transparent)]
    Upstream(#[from] ReplicateError),

    /// The upstream accepted the submit but returned no prediction id.
    #[error("Failed to create prediction")]
    SubmitFailed,

    /// The upstream reported the prediction as failed.
    #[error("Riffusion generation failed: {0}")]
    GenerationFailed(String),

    /// The prediction stayed in progress past the polling budget.
    #[error("Timeout waiting for Riffusion result")]
    PollTimedOut,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<PollError> for AppError {
    fn from(err: PollError) -> Self {
        match err {
            PollError::Upstream(e) => AppError::Upstream(e),
            PollError::Failed { message, .. } => AppError::GenerationFailed(message),
            PollError::TimedOut { .. } => AppError::PollTimedOut,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }

            AppError::SubmitFailed
            | AppError::GenerationFailed(_)
            | AppError::PollTimedOut => {
                tracing::error!(error = %self, "Generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
