//! The uniform response envelope returned by every builder.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::EnvelopeError;
use crate::generic_error::GenericError;
use crate::status::StatusCode;

/// Uniform response envelope.
///
/// `success` is true iff `status` is 1xx/2xx. Failure envelopes (3xx-5xx)
/// never carry `data`; success envelopes never carry `error`. Absent fields
/// are omitted from the serialized body:
///
/// ```json
/// { "status": 404, "success": false, "error": "missing" }
/// ```
///
/// `data` of a type that serializes to `null` (such as `()`) does not
/// survive a round trip: `"data": null` reads back as absent, so
/// `ok((), None)` deserializes to an envelope with `data() == None`.
///
/// Envelopes are immutable once built. Use the accessors to read them, or
/// [`into_parts`](Self::into_parts) to take the fields back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceResponse<T = Value, E = Value> {
    status: StatusCode,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<GenericError<E>>,
}

/// Owned fields of a [`ServiceResponse`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseParts<T, E> {
    pub status: StatusCode,
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    pub error: Option<GenericError<E>>,
}

impl<T, E> ServiceResponse<T, E> {
    /// Build an envelope for `status`, deriving `success` from its category.
    ///
    /// Success envelopes keep `data` and drop `error`; failure envelopes
    /// keep `error` and drop `data`.
    pub(crate) fn new(
        status: StatusCode,
        data: Option<T>,
        error: Option<GenericError<E>>,
        message: Option<String>,
    ) -> Self {
        let success = status.is_success();
        let (data, error) = if success { (data, None) } else { (None, error) };
        Self {
            status,
            success,
            message,
            data,
            error,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&GenericError<E>> {
        self.error.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn into_error(self) -> Option<GenericError<E>> {
        self.error
    }

    pub fn into_parts(self) -> ResponseParts<T, E> {
        ResponseParts {
            status: self.status,
            success: self.success,
            message: self.message,
            data: self.data,
            error: self.error,
        }
    }

    /// Transform the payload of a success envelope. Failure envelopes pass
    /// through with their error intact.
    pub fn map_data<U>(self, f: impl FnOnce(T) -> U) -> ServiceResponse<U, E> {
        ServiceResponse {
            status: self.status,
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            error: self.error,
        }
    }

    /// Transform the error of a failure envelope. Success envelopes pass
    /// through with their data intact.
    pub fn map_error<F>(
        self,
        f: impl FnOnce(GenericError<E>) -> GenericError<F>,
    ) -> ServiceResponse<T, F> {
        ServiceResponse {
            status: self.status,
            success: self.success,
            message: self.message,
            data: self.data,
            error: self.error.map(f),
        }
    }
}

#[derive(Deserialize)]
struct RawServiceResponse<T, E> {
    status: StatusCode,
    success: bool,
    message: Option<String>,
    data: Option<T>,
    error: Option<GenericError<E>>,
}

impl<T, E> RawServiceResponse<T, E> {
    fn validate(self) -> Result<ServiceResponse<T, E>, EnvelopeError> {
        let status = self.status;
        let inconsistent = |reason| EnvelopeError::InconsistentEnvelope {
            status: status.as_u16(),
            reason,
        };

        if self.success != status.is_success() {
            return Err(inconsistent("success flag does not match status"));
        }
        if self.success && self.error.is_some() {
            return Err(inconsistent("success envelope carries an error"));
        }
        if !self.success && self.data.is_some() {
            return Err(inconsistent("failure envelope carries data"));
        }

        Ok(ServiceResponse {
            status,
            success: self.success,
            message: self.message,
            data: self.data,
            error: self.error,
        })
    }
}

impl<'de, T, E> Deserialize<'de> for ServiceResponse<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawServiceResponse::deserialize(deserializer)?
            .validate()
            .map_err(serde::de::Error::custom)
    }
}
