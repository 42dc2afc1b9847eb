//! Shared helpers for API integration tests: a test configuration, the
//! full application router, request/response utilities, and a scripted
//! fake upstream standing in for the prediction API.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Request};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tunesmith_api::config::ServerConfig;
use tunesmith_api::router::build_app_router;
use tunesmith_api::state::AppState;
use tunesmith_replicate::poll::PollConfig;

/// Build a test `ServerConfig` with safe defaults.
///
/// The upstream URL points at a closed port; tests that talk upstream
/// override it with a spawned [`FakeUpstream`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        replicate_api_key: "test-key".to_string(),
        replicate_api_url: "http://127.0.0.1:9".to_string(),
        cors_origins: vec![
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(),
            "http://localhost:5177".to_string(),
        ],
        cors_origin_suffix: ".vercel.app".to_string(),
        request_timeout_secs: 330,
        expose_debug: false,
    }
}

/// Build the full application router over `config`, with millisecond-scale
/// polling so submit-then-poll tests finish quickly.
///
/// This calls the same [`build_app_router`] as `main.rs`, so integration
/// tests exercise the production middleware stack.
pub fn build_test_app(config: ServerConfig) -> Router {
    let poll = PollConfig {
        interval: Duration::from_millis(1),
        max_attempts: 60,
    };

    build_app_router(AppState::new(config, poll))
}

/// Issue a GET request against the app.
pub async fn get_uri(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fake upstream prediction server
// ---------------------------------------------------------------------------

/// Script for the fake upstream: one canned submit response plus a sequence
/// of status responses. The final entry repeats once the sequence runs out;
/// an empty sequence reports `processing` forever.
#[derive(Clone)]
pub struct FakeUpstream {
    submit_response: Arc<Value>,
    status_responses: Arc<Vec<Value>>,
    submits: Arc<AtomicUsize>,
    status_queries: Arc<AtomicUsize>,
    last_submit: Arc<Mutex<Option<CapturedSubmit>>>,
}

/// Headers and body of the most recent submit, for forwarding assertions.
#[derive(Clone)]
pub struct CapturedSubmit {
    pub headers: HeaderMap,
    pub body: Value,
}

impl FakeUpstream {
    pub fn new(submit_response: Value, status_responses: Vec<Value>) -> Self {
        Self {
            submit_response: Arc::new(submit_response),
            status_responses: Arc::new(status_responses),
            submits: Arc::new(AtomicUsize::new(0)),
            status_queries: Arc::new(AtomicUsize::new(0)),
            last_submit: Arc::new(Mutex::new(None)),
        }
    }

    pub fn submit_count(&self) -> usize {
        self.submits.load(Ordering::SeqCst)
    }

    pub fn status_query_count(&self) -> usize {
        self.status_queries.load(Ordering::SeqCst)
    }

    pub fn captured_submit(&self) -> CapturedSubmit {
        self.last_submit
            .lock()
            .unwrap()
            .clone()
            .expect("no submit captured")
    }

    /// Bind the fake upstream on an ephemeral port and return its base URL.
    pub async fn spawn(self) -> String {
        let app = Router::new()
            .route("/v1/predictions", post(handle_create))
            .route("/v1/predictions/{id}", get(handle_status))
            .with_state(self);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake upstream");
        });

        format!("http://{addr}")
    }
}

async fn handle_create(
    State(fake): State<FakeUpstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    fake.submits.fetch_add(1, Ordering::SeqCst);
    *fake.last_submit.lock().unwrap() = Some(CapturedSubmit { headers, body });
    Json((*fake.submit_response).clone())
}

async fn handle_status(State(fake): State<FakeUpstream>) -> Json<Value> {
    let n = fake.status_queries.fetch_add(1, Ordering::SeqCst);
    let response = fake
        .status_responses
        .get(n)
        .or_else(|| fake.status_responses.last())
        .cloned()
        .unwrap_or_else(|| json!({"status": "processing"}));
    Json(response)
}
