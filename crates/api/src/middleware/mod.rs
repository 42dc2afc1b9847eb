//! Request-level middleware.
//!
//! - [`origin::origin_guard`] -- refuses requests from disallowed browser
//!   origins before they reach a route handler.

pub mod origin;
