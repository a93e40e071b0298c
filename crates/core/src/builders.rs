//! One envelope builder per status code.
//!
//! Every function here is a thin, macro-generated wrapper over [`build`].
//! Builders are grouped by shape:
//!
//! - success codes take `(data, message)`,
//! - `no_content` and `reset_content` take only `(message)`,
//! - redirection and error codes take `(error, message)` and never set `data`.
//!
//! ```ignore
//! let found: ServiceResponse<User> = ok(user, Some("found"));
//! let missing: ServiceResponse<User> = not_found(Some("missing".into()), None);
//! ```

use crate::error::EnvelopeResult;
use crate::generic_error::GenericError;
use crate::response::ServiceResponse;
use crate::status::StatusCode;

/// The single generic builder every named builder delegates to.
///
/// `success` is derived from `status`. For 1xx/2xx the envelope keeps `data`
/// and discards `error`; for 3xx-5xx it keeps `error` and discards `data`.
pub fn build<T, E>(
    status: StatusCode,
    data: Option<T>,
    error: Option<GenericError<E>>,
    message: Option<&str>,
) -> ServiceResponse<T, E> {
    ServiceResponse::new(status, data, error, message.map(str::to_owned))
}

/// Dispatch on a semantic status name such as `"not_found"`.
///
/// Fails only when the name is not in the status table.
pub fn build_named<T, E>(
    name: &str,
    data: Option<T>,
    error: Option<GenericError<E>>,
    message: Option<&str>,
) -> EnvelopeResult<ServiceResponse<T, E>> {
    let status = StatusCode::from_name(name)?;
    Ok(build(status, data, error, message))
}

macro_rules! data_builders {
    ($( $fn_name:ident => $variant:ident; )*) => {
        $(
            #[doc = concat!("Success envelope for [`StatusCode::", stringify!($variant), "`] carrying `data`.")]
            pub fn $fn_name<T, E>(data: T, message: Option<&str>) -> ServiceResponse<T, E> {
                build(StatusCode::$variant, Some(data), None, message)
            }
        )*
    };
}

macro_rules! empty_builders {
    ($( $fn_name:ident => $variant:ident; )*) => {
        $(
            #[doc = concat!("Success envelope for [`StatusCode::", stringify!($variant), "`] with no `data`.")]
            pub fn $fn_name<T, E>(message: Option<&str>) -> ServiceResponse<T, E> {
                build(StatusCode::$variant, None, None, message)
            }
        )*
    };
}

macro_rules! error_builders {
    ($( $fn_name:ident => $variant:ident; )*) => {
        $(
            #[doc = concat!("Failure envelope for [`StatusCode::", stringify!($variant), "`].")]
            pub fn $fn_name<T, E>(
                error: Option<GenericError<E>>,
                message: Option<&str>,
            ) -> ServiceResponse<T, E> {
                build(StatusCode::$variant, None, error, message)
            }
        )*
    };
}

// Informational
data_builders! {
    r#continue => Continue;
    switching_protocols => SwitchingProtocols;
    processing => Processing;
    early_hints => EarlyHints;
}

// Success
data_builders! {
    ok => Ok;
    created => Created;
    accepted => Accepted;
    non_authoritative_information => NonAuthoritativeInformation;
    partial_content => PartialContent;
    multi_status => MultiStatus;
    already_reported => AlreadyReported;
    im_used => ImUsed;
}

empty_builders! {
    no_content => NoContent;
    reset_content => ResetContent;
}

/// Alias of [`ok`].
pub use self::ok as success;

// Redirection
error_builders! {
    multiple_choices => MultipleChoices;
    moved_permanently => MovedPermanently;
    found => Found;
    see_other => SeeOther;
    not_modified => NotModified;
    use_proxy => UseProxy;
    switch_proxy => SwitchProxy;
    temporary_redirect => TemporaryRedirect;
    permanent_redirect => PermanentRedirect;
}

// Client errors
error_builders! {
    bad_request => BadRequest;
    unauthorized => Unauthorized;
    payment_required => PaymentRequired;
    forbidden => Forbidden;
    not_found => NotFound;
    method_not_allowed => MethodNotAllowed;
    not_acceptable => NotAcceptable;
    proxy_authentication_required => ProxyAuthenticationRequired;
    request_timeout => RequestTimeout;
    conflict => Conflict;
    gone => Gone;
    length_required => LengthRequired;
    precondition_failed => PreconditionFailed;
    payload_too_large => PayloadTooLarge;
    uri_too_long => UriTooLong;
    unsupported_media_type => UnsupportedMediaType;
    range_not_satisfiable => RangeNotSatisfiable;
    expectation_failed => ExpectationFailed;
    i_am_a_teapot => IAmATeapot;
    misdirected_request => MisdirectedRequest;
    unprocessable_entity => UnprocessableEntity;
    locked => Locked;
    failed_dependency => FailedDependency;
    too_early => TooEarly;
    upgrade_required => UpgradeRequired;
    precondition_required => PreconditionRequired;
    too_many_requests => TooManyRequests;
    request_header_fields_too_large => RequestHeaderFieldsTooLarge;
    unavailable_for_legal_reasons => UnavailableForLegalReasons;
}

// Server errors
error_builders! {
    internal_server_error => InternalServerError;
    not_implemented => NotImplemented;
    bad_gateway => BadGateway;
    service_unavailable => ServiceUnavailable;
    gateway_timeout => GatewayTimeout;
    http_version_not_supported => HttpVersionNotSupported;
    variant_also_negotiates => VariantAlsoNegotiates;
    insufficient_storage => InsufficientStorage;
    loop_detected => LoopDetected;
    not_extended => NotExtended;
    network_authentication_required => NetworkAuthenticationRequired;
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::{json, Value};

    use super::*;
    use crate::error::EnvelopeError;
    use crate::generic_error::ErrorDetail;
    use crate::status::{StatusCategory, STATUS_TABLE};

    type Envelope = ServiceResponse<Value, Value>;

    #[test]
    fn test_ok_example_body() {
        let resp: Envelope = ok(json!({ "id": 1 }), Some("found"));
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "status": 200, "success": true, "data": { "id": 1 }, "message": "found" })
        );
    }

    #[test]
    fn test_not_found_example_body() {
        let resp: Envelope = not_found(Some("missing".into()), None);
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "status": 404, "success": false, "error": "missing" })
        );
    }

    #[test]
    fn test_success_alias_matches_ok() {
        let via_ok: Envelope = ok(json!([1, 2, 3]), Some("list"));
        let via_alias: Envelope = success(json!([1, 2, 3]), Some("list"));
        assert_eq!(via_ok, via_alias);

        let bare_ok: ServiceResponse<(), ()> = ok((), None);
        let bare_alias: ServiceResponse<(), ()> = success((), None);
        assert_eq!(bare_ok, bare_alias);
    }

    #[test]
    fn test_build_success_range_for_every_code() {
        for entry in STATUS_TABLE.iter().filter(|e| e.category.is_success()) {
            let resp: Envelope = build(entry.code, Some(json!("payload")), None, Some("msg"));
            assert_eq!(resp.status(), entry.code);
            assert!(resp.is_success(), "{} should succeed", entry.code);
            assert_eq!(resp.data(), Some(&json!("payload")));
            assert_eq!(resp.message(), Some("msg"));
            assert!(resp.error().is_none());
        }
    }

    #[test]
    fn test_build_failure_range_for_every_code() {
        for entry in STATUS_TABLE.iter().filter(|e| !e.category.is_success()) {
            let resp: Envelope = build(entry.code, None, Some("boom".into()), Some("msg"));
            assert_eq!(resp.status(), entry.code);
            assert!(!resp.is_success(), "{} should fail", entry.code);
            assert!(resp.data().is_none());
            assert_eq!(resp.error(), Some(&GenericError::from("boom")));
            assert_eq!(resp.message(), Some("msg"));
        }
    }

    #[test]
    fn test_build_named_matches_builder() {
        let named: Envelope =
            build_named("too_many_requests", None, Some("slow down".into()), None).unwrap();
        let direct: Envelope = too_many_requests(Some("slow down".into()), None);
        assert_eq!(named, direct);

        let aliased: Envelope = build_named("success", Some(json!(1)), None, None).unwrap();
        let expected: Envelope = ok(json!(1), None);
        assert_eq!(aliased, expected);
    }

    #[test]
    fn test_build_named_unknown_name() {
        let result: EnvelopeResult<Envelope> = build_named("teapot", None, None, None);
        assert_matches!(result, Err(EnvelopeError::UnknownStatusName(name)) if name == "teapot");
    }

    #[test]
    fn test_builders_are_idempotent() {
        let first: Envelope = conflict(Some(GenericError::detailed("slug taken")), Some("dup"));
        let second: Envelope = conflict(Some(GenericError::detailed("slug taken")), Some("dup"));
        assert_eq!(first, second);
    }

    macro_rules! builder_names {
        ($seen:ident; $( $fn_name:ident($($arg:expr),*) ),* $(,)?) => {
            $(
                let resp: Envelope = $fn_name($($arg),*);
                let fn_name = stringify!($fn_name).trim_start_matches("r#");
                assert_eq!(resp.status().name(), fn_name, "builder {fn_name}");
                $seen.push(fn_name);
            )*
        };
    }

    #[test]
    fn test_every_builder_matches_its_table_name() {
        let mut seen: Vec<&str> = Vec::new();
        builder_names! { seen;
            r#continue(json!(1), None),
            switching_protocols(json!(1), None),
            processing(json!(1), None),
            early_hints(json!(1), None),
            ok(json!(1), None),
            created(json!(1), None),
            accepted(json!(1), None),
            non_authoritative_information(json!(1), None),
            no_content(None),
            reset_content(None),
            partial_content(json!(1), None),
            multi_status(json!(1), None),
            already_reported(json!(1), None),
            im_used(json!(1), None),
            multiple_choices(None, None),
            moved_permanently(None, None),
            found(None, None),
            see_other(None, None),
            not_modified(None, None),
            use_proxy(None, None),
            switch_proxy(None, None),
            temporary_redirect(None, None),
            permanent_redirect(None, None),
            bad_request(None, None),
            unauthorized(None, None),
            payment_required(None, None),
            forbidden(None, None),
            not_found(None, None),
            method_not_allowed(None, None),
            not_acceptable(None, None),
            proxy_authentication_required(None, None),
            request_timeout(None, None),
            conflict(None, None),
            gone(None, None),
            length_required(None, None),
            precondition_failed(None, None),
            payload_too_large(None, None),
            uri_too_long(None, None),
            unsupported_media_type(None, None),
            range_not_satisfiable(None, None),
            expectation_failed(None, None),
            i_am_a_teapot(None, None),
            misdirected_request(None, None),
            unprocessable_entity(None, None),
            locked(None, None),
            failed_dependency(None, None),
            too_early(None, None),
            upgrade_required(None, None),
            precondition_required(None, None),
            too_many_requests(None, None),
            request_header_fields_too_large(None, None),
            unavailable_for_legal_reasons(None, None),
            internal_server_error(None, None),
            not_implemented(None, None),
            bad_gateway(None, None),
            service_unavailable(None, None),
            gateway_timeout(None, None),
            http_version_not_supported(None, None),
            variant_also_negotiates(None, None),
            insufficient_storage(None, None),
            loop_detected(None, None),
            not_extended(None, None),
            network_authentication_required(None, None),
        }

        let table_names: Vec<&str> = STATUS_TABLE.iter().map(|entry| entry.name).collect();
        assert_eq!(seen, table_names);
    }

    #[test]
    fn test_no_content_omits_data() {
        let resp: Envelope = no_content(Some("deleted"));
        assert_eq!(resp.status(), StatusCode::NoContent);
        assert!(resp.is_success());
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "status": 204, "success": true, "message": "deleted" })
        );

        let bare: Envelope = reset_content(None);
        assert_eq!(
            serde_json::to_value(&bare).unwrap(),
            json!({ "status": 205, "success": true })
        );
    }

    #[test]
    fn test_unit_data_is_passed_through() {
        let resp: ServiceResponse<(), ()> = accepted((), None);
        assert_eq!(resp.data(), Some(&()));
    }

    #[test]
    fn test_error_builder_without_arguments() {
        let resp: Envelope = internal_server_error(None, None);
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "status": 500, "success": false })
        );
    }

    #[test]
    fn test_structured_error_passes_through() {
        let error = GenericError::Detailed(ErrorDetail {
            message: Some("invalid email".to_string()),
            data: Some(json!({ "field": "email" })),
            extra: Some(json!({ "hint": "check the domain" })),
        });
        let resp: Envelope = unprocessable_entity(Some(error.clone()), Some("validation failed"));
        assert_eq!(resp.error(), Some(&error));
        assert_eq!(resp.status().category(), StatusCategory::ClientError);
    }

    #[test]
    fn test_continue_and_redirect_builders() {
        let resp: ServiceResponse<&str, ()> = r#continue("go on", None);
        assert_eq!(resp.status(), StatusCode::Continue);
        assert!(resp.is_success());

        let moved: ServiceResponse<(), ()> =
            permanent_redirect(Some("/new-home".into()), Some("moved"));
        assert_eq!(moved.status(), StatusCode::PermanentRedirect);
        assert!(!moved.is_success());
        assert!(moved.data().is_none());
    }
}
