//! Shared response writers.
//!
//! Failures of PROPFIND and REPORT keep their status code but carry a multistatus
//! body; every other failure is a short plain-text body.

use salvo::Response;
use salvo::http::{HeaderValue, Method, StatusCode};
use salvo::writing::Text;

use chrono::{DateTime, Utc};
use slotdav_core::constants::{CALENDAR_CONTENT_TYPE, XML_CONTENT_TYPE};
use slotdav_rfc::rfc::dav::build::serialize_multistatus;
use slotdav_rfc::rfc::dav::core::{Href, Multistatus, PropstatResponse, Status};
use slotdav_rfc::rfc::dav::validators::{format_http_date, if_none_match_matches};
use slotdav_service::error::ServiceError;

use crate::error::service_status;

/// ## Summary
/// Sets a response header, logging values that are not valid header text.
pub fn set_header(res: &mut Response, name: &'static str, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            #[expect(
                clippy::let_underscore_must_use,
                reason = "Header addition failure is non-fatal"
            )]
            let _ = res.add_header(name, value, true);
        }
        Err(e) => tracing::warn!(header = name, error = %e, "Invalid header value skipped"),
    }
}

/// Whether failures of this method are reported as multistatus documents.
#[must_use]
pub fn reports_multistatus(method: &Method) -> bool {
    matches!(method.as_str(), "PROPFIND" | "REPORT")
}

/// Writes a 207 multistatus document.
pub fn write_multistatus(res: &mut Response, multistatus: &Multistatus) {
    match serialize_multistatus(multistatus) {
        Ok(xml) => {
            res.status_code(StatusCode::MULTI_STATUS);
            set_header(res, "Content-Type", XML_CONTENT_TYPE);
            res.body(xml);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize multistatus");
            write_text(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
        }
    }
}

/// An iCalendar document about to be served.
pub struct CalendarDocument<'a> {
    pub text: String,
    pub etag: &'a str,
    pub last_modified: Option<DateTime<Utc>>,
}

/// ## Summary
/// Serves an iCalendar document with its validators.
///
/// A matching `If-None-Match` answers 304 without a body. HEAD requests
/// (`include_body == false`) get the headers of the full response only.
pub fn write_calendar(
    res: &mut Response,
    if_none_match: Option<&str>,
    document: CalendarDocument<'_>,
    include_body: bool,
) {
    set_header(res, "ETag", document.etag);
    if let Some(instant) = document.last_modified {
        set_header(res, "Last-Modified", &format_http_date(instant));
    }

    if if_none_match.is_some_and(|header| if_none_match_matches(header, document.etag)) {
        tracing::debug!(etag = document.etag, "Client copy is current");
        res.status_code(StatusCode::NOT_MODIFIED);
        return;
    }

    res.status_code(StatusCode::OK);
    set_header(res, "Content-Type", CALENDAR_CONTENT_TYPE);
    if include_body {
        res.body(document.text);
    } else {
        set_header(res, "Content-Length", &document.text.len().to_string());
    }
}

/// Writes a plain-text failure.
pub fn write_text(res: &mut Response, status: StatusCode, message: &str) {
    res.status_code(status);
    res.render(Text::Plain(message.to_string()));
}

/// ## Summary
/// Writes a failure status, as a multistatus document naming `href` when the
/// method reports failures that way, otherwise as plain text.
pub fn write_failure(
    res: &mut Response,
    method: &Method,
    href: &str,
    status: StatusCode,
    message: &str,
) {
    if reports_multistatus(method) {
        let mut multistatus = Multistatus::new();
        multistatus.add_response(PropstatResponse::status(
            Href::new(href),
            Status(status.as_u16()),
        ));
        if let Ok(xml) = serialize_multistatus(&multistatus) {
            res.status_code(status);
            set_header(res, "Content-Type", XML_CONTENT_TYPE);
            res.body(xml);
            return;
        }
    }
    write_text(res, status, message);
}

/// Writes a 401 with a Basic challenge for `realm`.
pub fn write_unauthorized(res: &mut Response, method: &Method, href: &str, realm: &str) {
    set_header(
        res,
        "WWW-Authenticate",
        &format!("Basic realm=\"{realm}\", charset=\"UTF-8\""),
    );
    write_failure(res, method, href, StatusCode::UNAUTHORIZED, "Unauthorized");
}

/// ## Summary
/// Writes the response for a service failure.
///
/// Upstream errors are logged and answered without details.
pub fn write_service_error(
    res: &mut Response,
    method: &Method,
    href: &str,
    realm: &str,
    err: &ServiceError,
) {
    let status = service_status(err);
    match err {
        ServiceError::AuthenticationFailed => write_unauthorized(res, method, href, realm),
        ServiceError::UpstreamError(_) | ServiceError::CoreError(_) => {
            tracing::error!(error = %err, "Request failed");
            write_failure(res, method, href, status, "Internal Server Error");
        }
        _ => {
            tracing::debug!(error = %err, status = status.as_u16(), "Request rejected");
            write_failure(res, method, href, status, &err.to_string());
        }
    }
}

/// Writes a 405 listing the allowed methods.
pub fn write_method_not_allowed(res: &mut Response, allow: &str) {
    set_header(res, "Allow", allow);
    write_text(res, StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
}
