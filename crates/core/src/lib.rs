//! Uniform response envelopes for HTTP handlers.
//!
//! Every builder in [`builders`] maps one HTTP status code onto a
//! [`ServiceResponse`]: success codes (1xx/2xx) carry `data`, redirection and
//! error codes (3xx-5xx) carry an optional [`GenericError`]. All builders
//! are driven by the single [`STATUS_TABLE`].

pub mod builders;
pub mod error;
pub mod generic_error;
pub mod response;
pub mod status;

pub use error::{EnvelopeError, EnvelopeResult};
pub use generic_error::{ErrorDetail, GenericError};
pub use response::{ResponseParts, ServiceResponse};
pub use status::{StatusCategory, StatusCode, StatusEntry, STATUS_TABLE};
