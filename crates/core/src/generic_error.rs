//! Error payloads carried by failure envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload of a [`ServiceResponse`](crate::ServiceResponse).
///
/// Either a plain string or a structured [`ErrorDetail`]. Serialized
/// untagged, so a string stays a JSON string and a detail becomes an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenericError<E = Value> {
    Message(String),
    Detailed(ErrorDetail<E>),
}

/// Structured error payload. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail<E = Value> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<E>,

    /// Arbitrary extra context, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl<E> Default for ErrorDetail<E> {
    fn default() -> Self {
        Self {
            message: None,
            data: None,
            extra: None,
        }
    }
}

impl<E> GenericError<E> {
    /// A structured error with only `message` set.
    pub fn detailed(message: impl Into<String>) -> Self {
        GenericError::Detailed(ErrorDetail {
            message: Some(message.into()),
            ..ErrorDetail::default()
        })
    }

    /// Attach typed error data, promoting a plain message to a detail.
    pub fn with_data(self, data: E) -> Self {
        let mut detail = self.into_detail();
        detail.data = Some(data);
        GenericError::Detailed(detail)
    }

    /// Attach free-form extra context, promoting a plain message to a detail.
    pub fn with_extra(self, extra: Value) -> Self {
        let mut detail = self.into_detail();
        detail.extra = Some(extra);
        GenericError::Detailed(detail)
    }

    /// Human-readable text of either shape, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            GenericError::Message(message) => Some(message),
            GenericError::Detailed(detail) => detail.message.as_deref(),
        }
    }

    fn into_detail(self) -> ErrorDetail<E> {
        match self {
            GenericError::Message(message) => ErrorDetail {
                message: Some(message),
                ..ErrorDetail::default()
            },
            GenericError::Detailed(detail) => detail,
        }
    }
}

impl<E> From<&str> for GenericError<E> {
    fn from(message: &str) -> Self {
        GenericError::Message(message.to_string())
    }
}

impl<E> From<String> for GenericError<E> {
    fn from(message: String) -> Self {
        GenericError::Message(message)
    }
}

impl<E> From<ErrorDetail<E>> for GenericError<E> {
    fn from(detail: ErrorDetail<E>) -> Self {
        GenericError::Detailed(detail)
    }
}
