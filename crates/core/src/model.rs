//! Fixed catalog of generation models accepted by the relay.
//!
//! The catalog is closed: a request naming anything outside it is rejected
//! before any upstream call is made. Each supported backend is addressed by
//! a pinned upstream version identifier.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pinned upstream versions
// ---------------------------------------------------------------------------

/// Upstream version identifier for the MusicGen backend.
pub const MUSICGEN_VERSION: &str =
    "671ac645ce5e552cc63a54a2bbff63fcf798043055d2dac5fc9e36a837eedcfb";

/// Upstream version identifier for the Riffusion backend.
pub const RIFFUSION_VERSION: &str =
    "8cf61ea6c56afd61d8f5b9ffd14d7c216c0a93844ce2d82ac1c9ecc9c7f24e05";

// ---------------------------------------------------------------------------
// Model selector
// ---------------------------------------------------------------------------

/// Model selector carried by generation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Musicgen,
    Riffusion,
    OtherModel,
}

/// Every model name a request may carry, in catalog order.
pub const ALLOWED_MODELS: &[&str] = &["musicgen", "riffusion", "other-model"];

impl Model {
    /// Wire name of the model as clients submit it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Musicgen => "musicgen",
            Model::Riffusion => "riffusion",
            Model::OtherModel => "other-model",
        }
    }

    /// Parse a caller-supplied model name against the catalog.
    ///
    /// Unknown names fail validation with the message surfaced to clients.
    pub fn parse(name: &str) -> Result<Model, CoreError> {
        match name {
            "musicgen" => Ok(Model::Musicgen),
            "riffusion" => Ok(Model::Riffusion),
            "other-model" => Ok(Model::OtherModel),
            _ => Err(CoreError::Validation("Invalid model selected".to_string())),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Musicgen
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
