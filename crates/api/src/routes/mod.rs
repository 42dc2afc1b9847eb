pub mod debug;
pub mod generate;
pub mod health;
pub mod parameters;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /parameters            allowed models and tuning defaults (GET)
/// /generate-audio        MusicGen submit with synchronous wait (POST)
/// /riffusion-generate    Riffusion submit-then-poll (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(parameters::router())
        .merge(generate::router())
}
