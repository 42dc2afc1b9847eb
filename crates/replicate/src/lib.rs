//! Replicate prediction API client library.
//!
//! Provides typed prediction state parsing, HTTP API wrappers, and the
//! bounded polling loop used to drive asynchronous predictions to a
//! terminal state.

pub mod client;
pub mod poll;
pub mod prediction;
