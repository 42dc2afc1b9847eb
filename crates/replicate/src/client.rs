//! REST API client for the Replicate prediction endpoints.
//!
//! Wraps the two upstream calls the relay depends on (prediction
//! submission and status retrieval) using [`reqwest`].

use serde::Serialize;

use crate::prediction::Prediction;

/// HTTP client for a Replicate-compatible prediction API.
pub struct ReplicateClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Errors from the upstream REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ReplicateError {
    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Replicate API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ReplicateClient {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `https://api.replicate.com`.
    /// * `api_key` - Account API token. An empty key sends no credential
    ///   and lets the upstream reject the call itself.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Submit a prediction request.
    ///
    /// Sends a `POST /v1/predictions` request with the model `version` and
    /// its `input` payload. When `wait` is set, adds a `Prefer: wait`
    /// header asking the upstream to hold the response open until the
    /// prediction finishes; the upstream may still respond early with an
    /// in-progress status.
    pub async fn create_prediction(
        &self,
        version: &str,
        input: &impl Serialize,
        wait: bool,
    ) -> Result<Prediction, ReplicateError> {
        let body = serde_json::json!({
            "version": version,
            "input": input,
        });

        let mut request = self
            .client
            .post(format!("{}/v1/predictions", self.base_url))
            .json(&body);
        if wait {
            request = request.header("Prefer", "wait");
        }

        let response = self.authorize(request).send().await?;

        Self::parse_response(response).await
    }

    /// Fetch the current state of a prediction.
    ///
    /// Sends a `GET /v1/predictions/{id}` request.
    pub async fn get_prediction(&self, id: &str) -> Result<Prediction, ReplicateError> {
        let request = self
            .client
            .get(format!("{}/v1/predictions/{}", self.base_url, id));

        let response = self.authorize(request).send().await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Attach the `Authorization: Token <key>` header, unless the key is
    /// empty.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.is_empty() {
            request
        } else {
            request.header(
                reqwest::header::AUTHORIZATION,
                format!("Token {}", self.api_key),
            )
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ReplicateError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ReplicateError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ReplicateError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into a [`Prediction`].
    async fn parse_response(response: reqwest::Response) -> Result<Prediction, ReplicateError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<Prediction>().await?)
    }
}
