//! Lenient single-event iCalendar decoder.

use chrono::{DateTime, Utc};
use slotdav_core::types::EventCategory;

use super::datetime::parse_utc;
use super::escape::{split_text_list, unescape_text};
use super::lexer::{parse_content_line, split_lines};
use crate::error::{RfcError, RfcResult};

/// The fields of a client-supplied `VEVENT` the gateway acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    pub uid: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Every `CATEGORIES` token, in order of appearance.
    pub categories: Vec<String>,
}

impl DecodedEvent {
    /// Returns the first category token the gateway recognizes.
    #[must_use]
    pub fn category(&self) -> Option<EventCategory> {
        self.categories
            .iter()
            .find_map(|c| EventCategory::from_token(c))
    }
}

/// ## Summary
/// Decodes the first `VEVENT` of an iCalendar text.
///
/// Unknown properties and parameters are ignored, as are properties of nested
/// components (e.g. `VALARM`). Additional `VEVENT` blocks after the first are ignored.
///
/// ## Errors
/// Returns `RfcError::ValidationError` if there is no `VEVENT`, if `DTSTART` or
/// `DTEND` is missing, or if either is not a UTC basic instant.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn decode_event(text: &str) -> RfcResult<DecodedEvent> {
    let mut in_event = false;
    let mut seen_event = false;
    let mut nested_depth: usize = 0;

    let mut uid = None;
    let mut summary = None;
    let mut description = None;
    let mut location = None;
    let mut dtstart = None;
    let mut dtend = None;
    let mut categories = Vec::new();

    for raw in split_lines(text) {
        let Some(line) = parse_content_line(&raw) else {
            tracing::trace!(line = %raw, "Skipping malformed content line");
            continue;
        };

        match line.name.as_str() {
            "BEGIN" if !in_event && line.value.eq_ignore_ascii_case("VEVENT") => {
                in_event = true;
                seen_event = true;
            }
            "BEGIN" if in_event => nested_depth += 1,
            "END" if in_event && nested_depth > 0 => nested_depth -= 1,
            "END" if in_event && line.value.eq_ignore_ascii_case("VEVENT") => break,
            _ if !in_event || nested_depth > 0 => {}
            "UID" => uid = Some(line.value.trim().to_string()),
            "SUMMARY" => summary = Some(unescape_text(&line.value)),
            "DESCRIPTION" => description = Some(unescape_text(&line.value)),
            "LOCATION" => location = Some(unescape_text(&line.value)),
            "DTSTART" => dtstart = Some(parse_utc(&line.value)?),
            "DTEND" => dtend = Some(parse_utc(&line.value)?),
            "CATEGORIES" => categories.extend(
                split_text_list(&line.value)
                    .into_iter()
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty()),
            ),
            _ => {}
        }
    }

    if !seen_event {
        return Err(RfcError::ValidationError(
            "no VEVENT component found".to_string(),
        ));
    }

    let start = dtstart.ok_or_else(|| RfcError::ValidationError("missing DTSTART".to_string()))?;
    let end = dtend.ok_or_else(|| RfcError::ValidationError("missing DTEND".to_string()))?;

    Ok(DecodedEvent {
        uid,
        summary,
        description,
        location,
        start,
        end,
        categories,
    })
}
