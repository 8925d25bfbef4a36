//! UTC DATE-TIME values in basic format (`YYYYMMDDTHHMMSSZ`).

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{RfcError, RfcResult};

/// Formats an instant as an iCalendar UTC DATE-TIME.
#[must_use]
pub fn format_utc(value: &DateTime<Utc>) -> String {
    value.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parses an iCalendar UTC DATE-TIME.
///
/// Only the UTC basic form is accepted. Floating times, `TZID`-relative times and
/// DATE values are rejected.
///
/// ## Errors
/// Returns `RfcError::ValidationError` if the value is not a valid UTC basic instant.
pub fn parse_utc(value: &str) -> RfcResult<DateTime<Utc>> {
    parse_utc_opt(value.trim())
        .ok_or_else(|| RfcError::ValidationError(format!("unsupported date-time value: {value}")))
}

fn parse_utc_opt(value: &str) -> Option<DateTime<Utc>> {
    let basic = value.strip_suffix('Z')?;
    let well_formed = basic.len() == 15
        && basic
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 8 { b == b'T' } else { b.is_ascii_digit() });
    if !well_formed {
        return None;
    }

    NaiveDateTime::parse_from_str(basic, "%Y%m%dT%H%M%S")
        .ok()
        .map(|naive| naive.and_utc())
}
