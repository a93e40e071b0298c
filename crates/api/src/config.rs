/// Default text substituted for server-error details when redaction is on.
pub const DEFAULT_SERVER_ERROR_MESSAGE: &str = "An internal error occurred";

/// Rendering policy for [`ApiResponse`](crate::ApiResponse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeConfig {
    /// Replace the `error` of 5xx envelopes before they reach the client.
    pub redact_server_errors: bool,
    /// Text used in place of a redacted server error.
    pub server_error_message: String,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            redact_server_errors: false,
            server_error_message: DEFAULT_SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl EnvelopeConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                      |
    /// |---------------------------------|------------------------------|
    /// | `ENVELOPE_REDACT_SERVER_ERRORS` | `false`                      |
    /// | `ENVELOPE_SERVER_ERROR_MESSAGE` | `An internal error occurred` |
    ///
    /// Unparseable booleans fall back to the default and log a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let redact_server_errors = lookup("ENVELOPE_REDACT_SERVER_ERRORS")
            .map(|raw| {
                parse_bool(
                    "ENVELOPE_REDACT_SERVER_ERRORS",
                    &raw,
                    defaults.redact_server_errors,
                )
            })
            .unwrap_or(defaults.redact_server_errors);

        let server_error_message = lookup("ENVELOPE_SERVER_ERROR_MESSAGE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.server_error_message);

        Self {
            redact_server_errors,
            server_error_message,
        }
    }
}

fn parse_bool(key: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        other => {
            tracing::warn!(key, value = other, default, "Invalid boolean, using default");
            default
        }
    }
}
