//! Fixed-interval polling for asynchronous predictions.
//!
//! A submission made without the synchronous-wait hint returns right away
//! with an in-progress status. The caller should then drive the prediction
//! to a terminal state with [`poll_until_terminal`], which re-queries the
//! upstream at a fixed interval and gives up after a bounded number of
//! status checks.

use std::time::Duration;

use serde_json::Value;

use crate::client::{ReplicateClient, ReplicateError};
use crate::prediction::{Prediction, PredictionStatus};

/// Delay between consecutive status checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Upper bound on status checks for a single prediction. Together with
/// [`POLL_INTERVAL`] this caps a poll at five minutes of waiting.
pub const MAX_POLL_ATTEMPTS: u32 = 60;

/// Tunable parameters for the polling loop.
///
/// Tests shrink the interval to keep the loop fast; production uses
/// [`Default`], which matches the named constants above.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Delay between consecutive status checks.
    pub interval: Duration,
    /// Upper bound on status checks before giving up.
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_attempts: MAX_POLL_ATTEMPTS,
        }
    }
}

/// Errors from the polling loop.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// A status check could not be completed.
    #[error(transparent)]
    Upstream(#[from] ReplicateError),

    /// The upstream reported the prediction as failed.
    #[error("Prediction {id} failed: {message}")]
    Failed {
        /// Upstream prediction identifier.
        id: String,
        /// Upstream failure message.
        message: String,
    },

    /// The prediction was still in progress after the final status check.
    #[error("Prediction {id} still in progress after {attempts} status checks")]
    TimedOut {
        /// Upstream prediction identifier.
        id: String,
        /// Number of status checks issued before giving up.
        attempts: u32,
    },
}

/// Poll the upstream until the prediction with `id` reaches a terminal
/// state.
///
/// `initial` is the submit response; if it already carries a terminal
/// status, no status check is issued at all. Each iteration sleeps
/// [`PollConfig::interval`] before querying, so at most
/// [`PollConfig::max_attempts`] status checks hit the upstream. A `failed`
/// status becomes [`PollError::Failed`]; every other terminal status
/// (including `canceled`) is returned to the caller unchanged.
pub async fn poll_until_terminal(
    client: &ReplicateClient,
    id: &str,
    initial: Prediction,
    config: &PollConfig,
) -> Result<Prediction, PollError> {
    let mut current = initial;
    let mut attempts = 0u32;

    while current.is_in_progress() {
        if attempts >= config.max_attempts {
            return Err(PollError::TimedOut {
                id: id.to_string(),
                attempts,
            });
        }

        tokio::time::sleep(config.interval).await;

        current = client.get_prediction(id).await?;
        attempts += 1;

        tracing::debug!(
            id,
            attempt = attempts,
            status = ?current.status,
            "Checked prediction status",
        );
    }

    if current.status == Some(PredictionStatus::Failed) {
        // The upstream error is a JSON value: a message string on real
        // failures, null or absent otherwise.
        let message = match &current.error {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => "unknown error".to_string(),
            Some(other) => other.to_string(),
        };
        return Err(PollError::Failed {
            id: id.to_string(),
            message,
        });
    }

    Ok(current)
}
