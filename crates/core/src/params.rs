//! Tuning parameters for the two generation backends.
//!
//! Every field carries the fixed default applied when a caller omits it, and
//! deserializes leniently (see [`crate::coerce`]) so sloppy browser values
//! arrive upstream with their declared JSON types. No range validation is
//! performed; the upstream owns semantic limits.

use serde::{Deserialize, Serialize};

use crate::coerce;

// ---------------------------------------------------------------------------
// MusicGen
// ---------------------------------------------------------------------------

/// Tuning parameters for a MusicGen submission.
///
/// The defaults here are the set published by `GET /api/parameters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicgenParams {
    #[serde(default = "default_top_k", deserialize_with = "coerce::int")]
    pub top_k: u32,
    #[serde(default = "default_top_p", deserialize_with = "coerce::float")]
    pub top_p: f64,
    #[serde(default = "default_duration", deserialize_with = "coerce::int")]
    pub duration: u32,
    #[serde(default = "default_temperature", deserialize_with = "coerce::float")]
    pub temperature: f64,
    #[serde(default, deserialize_with = "coerce::boolean")]
    pub continuation: bool,
    #[serde(default = "default_model_version", deserialize_with = "coerce::string")]
    pub model_version: String,
    #[serde(default = "default_output_format", deserialize_with = "coerce::string")]
    pub output_format: String,
    #[serde(default, deserialize_with = "coerce::int")]
    pub continuation_start: u32,
    #[serde(default, deserialize_with = "coerce::boolean")]
    pub multi_band_diffusion: bool,
    #[serde(
        default = "default_normalization_strategy",
        deserialize_with = "coerce::string"
    )]
    pub normalization_strategy: String,
    #[serde(
        default = "default_classifier_free_guidance",
        deserialize_with = "coerce::int"
    )]
    pub classifier_free_guidance: u32,
}

fn default_top_k() -> u32 {
    250
}

fn default_top_p() -> f64 {
    0.0
}

fn default_duration() -> u32 {
    8
}

fn default_temperature() -> f64 {
    1.0
}

fn default_model_version() -> String {
    "stereo-large".to_string()
}

fn default_output_format() -> String {
    "mp3".to_string()
}

fn default_normalization_strategy() -> String {
    "peak".to_string()
}

fn default_classifier_free_guidance() -> u32 {
    3
}

impl Default for MusicgenParams {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            top_p: default_top_p(),
            duration: default_duration(),
            temperature: default_temperature(),
            continuation: false,
            model_version: default_model_version(),
            output_format: default_output_format(),
            continuation_start: 0,
            multi_band_diffusion: false,
            normalization_strategy: default_normalization_strategy(),
            classifier_free_guidance: default_classifier_free_guidance(),
        }
    }
}

/// Upstream `input` object for a MusicGen submission.
#[derive(Debug, Serialize)]
pub struct MusicgenInput<'a> {
    pub prompt: &'a str,
    #[serde(flatten)]
    pub params: &'a MusicgenParams,
}

impl MusicgenParams {
    /// Pair these parameters with a prompt as the upstream input object.
    pub fn to_input<'a>(&'a self, prompt: &'a str) -> MusicgenInput<'a> {
        MusicgenInput {
            prompt,
            params: self,
        }
    }
}

// ---------------------------------------------------------------------------
// Riffusion
// ---------------------------------------------------------------------------

/// Tuning parameters for a Riffusion submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiffusionParams {
    /// Secondary prompt for interpolation; blank disables it.
    #[serde(default)]
    pub prompt_b: String,
    #[serde(default = "default_denoising", deserialize_with = "coerce::float")]
    pub denoising: f64,
    #[serde(default = "default_alpha", deserialize_with = "coerce::float")]
    pub alpha: f64,
    #[serde(
        default = "default_num_inference_steps",
        deserialize_with = "coerce::int"
    )]
    pub num_inference_steps: u32,
    #[serde(default = "default_seed_image_id", deserialize_with = "coerce::string")]
    pub seed_image_id: String,
}

fn default_denoising() -> f64 {
    0.75
}

fn default_alpha() -> f64 {
    0.5
}

fn default_num_inference_steps() -> u32 {
    50
}

fn default_seed_image_id() -> String {
    "vibes".to_string()
}

impl Default for RiffusionParams {
    fn default() -> Self {
        Self {
            prompt_b: String::new(),
            denoising: default_denoising(),
            alpha: default_alpha(),
            num_inference_steps: default_num_inference_steps(),
            seed_image_id: default_seed_image_id(),
        }
    }
}

/// Upstream `input` object for a Riffusion submission.
///
/// The caller's primary prompt maps to `prompt_a`; `prompt_b` and `alpha`
/// appear only when a secondary prompt was supplied.
#[derive(Debug, Serialize)]
pub struct RiffusionInput<'a> {
    pub prompt_a: &'a str,
    pub denoising: f64,
    pub num_inference_steps: u32,
    pub seed_image_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_b: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl RiffusionParams {
    /// Build the upstream input, including the interpolation pair only when
    /// `prompt_b` is non-blank.
    pub fn to_input<'a>(&'a self, prompt: &'a str) -> RiffusionInput<'a> {
        let has_secondary = !self.prompt_b.trim().is_empty();
        RiffusionInput {
            prompt_a: prompt,
            denoising: self.denoising,
            num_inference_steps: self.num_inference_steps,
            seed_image_id: &self.seed_image_id,
            prompt_b: has_secondary.then_some(self.prompt_b.as_str()),
            alpha: has_secondary.then_some(self.alpha),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
