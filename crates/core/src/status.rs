//! The fixed set of HTTP status codes the envelope builders cover.
//!
//! [`STATUS_TABLE`] is the single source of truth: the [`StatusCode`] enum,
//! name lookup, reason phrases and the category of every code are all
//! generated from the one `status_codes!` invocation below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EnvelopeError, EnvelopeResult};

/// Name accepted by [`StatusCode::from_name`] as an alias for `ok`.
pub const SUCCESS_ALIAS: &str = "success";

/// Coarse grouping of status codes by their hundreds digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusCategory {
    /// Whether envelopes in this category are successful and carry `data`.
    pub const fn is_success(self) -> bool {
        matches!(self, StatusCategory::Informational | StatusCategory::Success)
    }
}

/// One row of [`STATUS_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub name: &'static str,
    pub code: StatusCode,
    pub category: StatusCategory,
}

macro_rules! status_codes {
    (
        $(
            $category:ident {
                $( $variant:ident = $code:literal, $name:literal, $reason:literal; )*
            }
        )*
    ) => {
        /// A standard HTTP status code (100-511).
        ///
        /// Serialized as the bare integer, e.g. `404`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(into = "u16", try_from = "u16")]
        #[repr(u16)]
        pub enum StatusCode {
            $( $( $variant = $code, )* )*
        }

        /// Every supported status code with its semantic name and category,
        /// in ascending code order.
        pub static STATUS_TABLE: &[StatusEntry] = &[
            $( $(
                StatusEntry {
                    name: $name,
                    code: StatusCode::$variant,
                    category: StatusCategory::$category,
                },
            )* )*
        ];

        impl StatusCode {
            /// All supported codes, in ascending order.
            pub const ALL: &'static [StatusCode] = &[ $( $( StatusCode::$variant, )* )* ];

            /// Semantic snake_case name, matching the builder function name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $( StatusCode::$variant => $name, )* )*
                }
            }

            /// IANA reason phrase, e.g. `"Not Found"`.
            pub const fn canonical_reason(self) -> &'static str {
                match self {
                    $( $( StatusCode::$variant => $reason, )* )*
                }
            }
        }

        impl TryFrom<u16> for StatusCode {
            type Error = EnvelopeError;

            fn try_from(code: u16) -> EnvelopeResult<Self> {
                match code {
                    $( $( $code => Ok(StatusCode::$variant), )* )*
                    other => Err(EnvelopeError::UnknownStatusCode(other)),
                }
            }
        }
    };
}

status_codes! {
    Informational {
        Continue = 100, "continue", "Continue";
        SwitchingProtocols = 101, "switching_protocols", "Switching Protocols";
        Processing = 102, "processing", "Processing";
        EarlyHints = 103, "early_hints", "Early Hints";
    }
    Success {
        Ok = 200, "ok", "OK";
        Created = 201, "created", "Created";
        Accepted = 202, "accepted", "Accepted";
        NonAuthoritativeInformation = 203, "non_authoritative_information", "Non-Authoritative Information";
        NoContent = 204, "no_content", "No Content";
        ResetContent = 205, "reset_content", "Reset Content";
        PartialContent = 206, "partial_content", "Partial Content";
        MultiStatus = 207, "multi_status", "Multi-Status";
        AlreadyReported = 208, "already_reported", "Already Reported";
        ImUsed = 226, "im_used", "IM Used";
    }
    Redirection {
        MultipleChoices = 300, "multiple_choices", "Multiple Choices";
        MovedPermanently = 301, "moved_permanently", "Moved Permanently";
        Found = 302, "found", "Found";
        SeeOther = 303, "see_other", "See Other";
        NotModified = 304, "not_modified", "Not Modified";
        UseProxy = 305, "use_proxy", "Use Proxy";
        SwitchProxy = 306, "switch_proxy", "Switch Proxy";
        TemporaryRedirect = 307, "temporary_redirect", "Temporary Redirect";
        PermanentRedirect = 308, "permanent_redirect", "Permanent Redirect";
    }
    ClientError {
        BadRequest = 400, "bad_request", "Bad Request";
        Unauthorized = 401, "unauthorized", "Unauthorized";
        PaymentRequired = 402, "payment_required", "Payment Required";
        Forbidden = 403, "forbidden", "Forbidden";
        NotFound = 404, "not_found", "Not Found";
        MethodNotAllowed = 405, "method_not_allowed", "Method Not Allowed";
        NotAcceptable = 406, "not_acceptable", "Not Acceptable";
        ProxyAuthenticationRequired = 407, "proxy_authentication_required", "Proxy Authentication Required";
        RequestTimeout = 408, "request_timeout", "Request Timeout";
        Conflict = 409, "conflict", "Conflict";
        Gone = 410, "gone", "Gone";
        LengthRequired = 411, "length_required", "Length Required";
        PreconditionFailed = 412, "precondition_failed", "Precondition Failed";
        PayloadTooLarge = 413, "payload_too_large", "Payload Too Large";
        UriTooLong = 414, "uri_too_long", "URI Too Long";
        UnsupportedMediaType = 415, "unsupported_media_type", "Unsupported Media Type";
        RangeNotSatisfiable = 416, "range_not_satisfiable", "Range Not Satisfiable";
        ExpectationFailed = 417, "expectation_failed", "Expectation Failed";
        IAmATeapot = 418, "i_am_a_teapot", "I'm a teapot";
        MisdirectedRequest = 421, "misdirected_request", "Misdirected Request";
        UnprocessableEntity = 422, "unprocessable_entity", "Unprocessable Entity";
        Locked = 423, "locked", "Locked";
        FailedDependency = 424, "failed_dependency", "Failed Dependency";
        TooEarly = 425, "too_early", "Too Early";
        UpgradeRequired = 426, "upgrade_required", "Upgrade Required";
        PreconditionRequired = 428, "precondition_required", "Precondition Required";
        TooManyRequests = 429, "too_many_requests", "Too Many Requests";
        RequestHeaderFieldsTooLarge = 431, "request_header_fields_too_large", "Request Header Fields Too Large";
        UnavailableForLegalReasons = 451, "unavailable_for_legal_reasons", "Unavailable For Legal Reasons";
    }
    ServerError {
        InternalServerError = 500, "internal_server_error", "Internal Server Error";
        NotImplemented = 501, "not_implemented", "Not Implemented";
        BadGateway = 502, "bad_gateway", "Bad Gateway";
        ServiceUnavailable = 503, "service_unavailable", "Service Unavailable";
        GatewayTimeout = 504, "gateway_timeout", "Gateway Timeout";
        HttpVersionNotSupported = 505, "http_version_not_supported", "HTTP Version Not Supported";
        VariantAlsoNegotiates = 506, "variant_also_negotiates", "Variant Also Negotiates";
        InsufficientStorage = 507, "insufficient_storage", "Insufficient Storage";
        LoopDetected = 508, "loop_detected", "Loop Detected";
        NotExtended = 510, "not_extended", "Not Extended";
        NetworkAuthenticationRequired = 511, "network_authentication_required", "Network Authentication Required";
    }
}

impl StatusCode {
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    pub const fn category(self) -> StatusCategory {
        match self.as_u16() {
            100..=199 => StatusCategory::Informational,
            200..=299 => StatusCategory::Success,
            300..=399 => StatusCategory::Redirection,
            400..=499 => StatusCategory::ClientError,
            _ => StatusCategory::ServerError,
        }
    }

    /// True for 1xx and 2xx codes.
    pub const fn is_success(self) -> bool {
        self.category().is_success()
    }

    /// Look a code up by its semantic name (`"not_found"`).
    ///
    /// `"success"` is accepted as an alias for `"ok"`.
    pub fn from_name(name: &str) -> EnvelopeResult<Self> {
        if name == SUCCESS_ALIAS {
            return Ok(StatusCode::Ok);
        }
        STATUS_TABLE
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.code)
            .ok_or_else(|| EnvelopeError::UnknownStatusName(name.to_string()))
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> u16 {
        code.as_u16()
    }
}

impl FromStr for StatusCode {
    type Err = EnvelopeError;

    fn from_str(name: &str) -> EnvelopeResult<Self> {
        StatusCode::from_name(name)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.canonical_reason())
    }
}
