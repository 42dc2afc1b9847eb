//! Typed view of upstream prediction payloads.
//!
//! [`Prediction`] types only the fields the relay inspects (id, status,
//! output, error); every other field the upstream sends is captured in
//! `extra` and serialized back out unchanged, so callers see the upstream
//! response verbatim.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Lifecycle states reported by the upstream for a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    /// Any status string this crate does not recognize. Treated as
    /// terminal so an upstream vocabulary change cannot wedge a poll loop.
    #[serde(other)]
    Unknown,
}

impl PredictionStatus {
    /// Whether the upstream still has work in flight for this prediction.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, PredictionStatus::Starting | PredictionStatus::Processing)
    }

    /// Whether this status ends a polling loop.
    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }
}

/// Keep an explicit JSON `null` distinct from an absent key: an absent key
/// stays `None` through the field default, while a present `null`
/// deserializes to `Some(Value::Null)` and re-serializes as `null`.
fn preserve_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A prediction as reported by the upstream API.
///
/// Deserialized from both the submit response and status-check responses.
/// Absent fields stay absent on re-serialization, and the explicit nulls
/// the upstream sends while a prediction is in flight (`"output": null`,
/// `"error": null`) stay null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Upstream-assigned identifier. Missing on malformed submit responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PredictionStatus>,
    /// Output payload. Explicitly null until the prediction succeeds, then
    /// a bare URL string, an array of URL strings, or a model-specific
    /// wrapper object.
    #[serde(
        default,
        deserialize_with = "preserve_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub output: Option<Value>,
    /// Failure message. Explicitly null unless the prediction failed.
    #[serde(
        default,
        deserialize_with = "preserve_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<Value>,
    /// All remaining upstream fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Prediction {
    /// Whether the upstream reports this prediction as still running.
    ///
    /// A missing status counts as terminal; there is nothing to wait on.
    pub fn is_in_progress(&self) -> bool {
        self.status.is_some_and(|status| status.is_in_progress())
    }

    /// Collapse a model-specific `{"audio": ...}` wrapper object so every
    /// backend presents its output as a bare URL (or array of URLs).
    ///
    /// Only applies to succeeded predictions whose output is an object with
    /// an `audio` key; anything else is left exactly as the upstream sent it.
    pub fn normalize_output(&mut self) {
        if self.status != Some(PredictionStatus::Succeeded) {
            return;
        }
        let Some(Value::Object(wrapper)) = &self.output else {
            return;
        };
        if let Some(audio) = wrapper.get("audio") {
            self.output = Some(audio.clone());
        }
    }
}
