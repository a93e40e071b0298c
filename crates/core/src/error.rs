/// Errors raised at the conversion and lookup edges of the crate.
///
/// The envelope builders themselves are total; these only surface when a
/// status code or envelope comes from outside (integers, names, JSON).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("Unknown HTTP status code: {0}")]
    UnknownStatusCode(u16),

    #[error("Unknown status name: {0}")]
    UnknownStatusName(String),

    #[error("Inconsistent envelope for status {status}: {reason}")]
    InconsistentEnvelope { status: u16, reason: &'static str },
}

/// Convenience alias for fallible operations in this crate.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
