//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct
//! HTTP status code and the relay's flat `{"error": <message>}` body. They
//! do NOT need an HTTP server -- they call `IntoResponse` directly.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::json;
use tunesmith_api::error::AppError;
use tunesmith_core::error::CoreError;
use tunesmith_replicate::client::ReplicateError;
use tunesmith_replicate::poll::PollError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: validation errors map to 400 with the bare message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_bare_message() {
    let err = AppError::Core(CoreError::Validation("Invalid model selected".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Invalid model selected"}));
}

// ---------------------------------------------------------------------------
// Test: the error body carries no structured code field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_body_has_no_code_field() {
    let err = AppError::SubmitFailed;

    let (_, json) = error_to_response(err).await;

    assert!(json.get("code").is_none());
    assert_eq!(json.as_object().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: a 2xx-but-id-less submit maps to 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_failed_returns_500() {
    let (status, json) = error_to_response(AppError::SubmitFailed).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "Failed to create prediction"}));
}

// ---------------------------------------------------------------------------
// Test: a failed generation carries the upstream message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generation_failed_includes_the_upstream_message() {
    let err = AppError::GenerationFailed("NSFW content detected".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({"error": "Riffusion generation failed: NSFW content detected"})
    );
}

// ---------------------------------------------------------------------------
// Test: a polling timeout maps to 500 with the fixed message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn poll_timeout_returns_500_with_fixed_message() {
    let (status, json) = error_to_response(AppError::PollTimedOut).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "Timeout waiting for Riffusion result"}));
}

// ---------------------------------------------------------------------------
// Test: upstream API errors map to 500 and keep the status and body text
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_api_error_returns_500_with_details() {
    let err = AppError::Upstream(ReplicateError::Api {
        status: 402,
        body: "Insufficient credit".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("402"));
    assert!(message.contains("Insufficient credit"));
}

// ---------------------------------------------------------------------------
// Test: poll errors convert onto the right AppError variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn poll_errors_convert_to_matching_variants() {
    let failed = PollError::Failed {
        id: "pred-1".into(),
        message: "bad prompt".into(),
    };
    assert!(matches!(
        AppError::from(failed),
        AppError::GenerationFailed(message) if message == "bad prompt"
    ));

    let timed_out = PollError::TimedOut {
        id: "pred-1".into(),
        attempts: 60,
    };
    assert!(matches!(AppError::from(timed_out), AppError::PollTimedOut));

    let upstream = PollError::Upstream(ReplicateError::Api {
        status: 500,
        body: "boom".into(),
    });
    assert!(matches!(AppError::from(upstream), AppError::Upstream(_)));
}
