//! [`IntoResponse`] adapter for [`ServiceResponse`] envelopes.

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use envelope_core::{GenericError, ServiceResponse, StatusCategory, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::EnvelopeConfig;

/// Handler return type that renders a [`ServiceResponse`] as JSON.
///
/// The HTTP status line is the envelope status, except for informational
/// (1xx) envelopes: a 1xx code cannot be a final response, so those are sent
/// as `200 OK` and the real code stays in the body's `status` field.
///
/// # Example
///
/// ```ignore
/// async fn show(Path(id): Path<i64>) -> ApiResponse<User> {
///     match find(id) {
///         Some(user) => ApiResponse::new(builders::ok(user, None)),
///         None => ApiResponse::new(builders::not_found(Some("user not found".into()), None)),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T = Value, E = Value> {
    envelope: ServiceResponse<T, E>,
    redaction: Option<String>,
}

impl<T, E> ApiResponse<T, E> {
    /// Render the envelope as-is.
    pub fn new(envelope: ServiceResponse<T, E>) -> Self {
        Self {
            envelope,
            redaction: None,
        }
    }

    /// Render the envelope under the given policy.
    pub fn with_config(envelope: ServiceResponse<T, E>, config: &EnvelopeConfig) -> Self {
        let redaction = config
            .redact_server_errors
            .then(|| config.server_error_message.clone());
        Self {
            envelope,
            redaction,
        }
    }

    pub fn envelope(&self) -> &ServiceResponse<T, E> {
        &self.envelope
    }

    pub fn into_envelope(self) -> ServiceResponse<T, E> {
        self.envelope
    }
}

impl<T, E> From<ServiceResponse<T, E>> for ApiResponse<T, E> {
    fn from(envelope: ServiceResponse<T, E>) -> Self {
        Self::new(envelope)
    }
}

/// Map an envelope status onto axum's status type.
pub fn http_status(status: StatusCode) -> axum::http::StatusCode {
    // Every code in the table is within 100..=999, so this cannot fail.
    axum::http::StatusCode::from_u16(status.as_u16())
        .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
}

/// Final status line for an envelope. Informational codes become `200 OK`.
pub fn wire_status(status: StatusCode) -> axum::http::StatusCode {
    match status.category() {
        StatusCategory::Informational => axum::http::StatusCode::OK,
        _ => http_status(status),
    }
}

impl<T: Serialize, E: Serialize> IntoResponse for ApiResponse<T, E> {
    fn into_response(self) -> Response {
        let status = self.envelope.status();
        let category = status.category();

        let envelope = match self.redaction {
            Some(text) if category == StatusCategory::ServerError => {
                self.envelope.map_error(|_| GenericError::Message(text))
            }
            _ => self.envelope,
        };

        let error_text = envelope.error().and_then(GenericError::message);
        match category {
            StatusCategory::ServerError => tracing::error!(
                status = status.as_u16(),
                envelope_message = ?envelope.message(),
                error = ?error_text,
                "Server error response"
            ),
            StatusCategory::ClientError => tracing::warn!(
                status = status.as_u16(),
                envelope_message = ?envelope.message(),
                error = ?error_text,
                "Client error response"
            ),
            StatusCategory::Informational => tracing::warn!(
                status = status.as_u16(),
                "Informational envelope sent with final status 200"
            ),
            _ => tracing::debug!(status = status.as_u16(), "Envelope response"),
        }

        match serde_json::to_vec(&envelope) {
            Ok(body) => (
                wire_status(status),
                [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, status = status.as_u16(), "Failed to serialize envelope");
                let body = json!({
                    "status": 500,
                    "success": false,
                    "error": "Failed to serialize response",
                });
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(body),
                )
                    .into_response()
            }
        }
    }
}
