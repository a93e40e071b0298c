//! Axum integration for `envelope_core` envelopes.
//!
//! Wrap a [`ServiceResponse`](envelope_core::ServiceResponse) in
//! [`ApiResponse`] to return it from a handler: the envelope's status becomes
//! the HTTP status line (1xx envelopes go out as `200 OK`) and the envelope
//! itself becomes the JSON body.

pub mod config;
pub mod response;

pub use config::EnvelopeConfig;
pub use response::{http_status, wire_status, ApiResponse};
