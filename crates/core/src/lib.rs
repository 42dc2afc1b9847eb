//! Domain logic for the Tunesmith relay: the model catalog, tuning
//! parameters with their fixed defaults, lenient type coercion for
//! browser-supplied values, and validation errors.
//!
//! This crate performs no I/O; the upstream client lives in
//! `tunesmith-replicate` and the HTTP surface in `tunesmith-api`.

pub mod coerce;
pub mod error;
pub mod model;
pub mod params;

pub use error::CoreError;
pub use model::{Model, ALLOWED_MODELS, MUSICGEN_VERSION, RIFFUSION_VERSION};
pub use params::{MusicgenParams, RiffusionParams};
