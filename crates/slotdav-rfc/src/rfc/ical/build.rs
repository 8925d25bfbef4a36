//! iCalendar serialization of derived events.

use slotdav_core::constants::PRODID;
use slotdav_core::types::{CalendarEvent, CalendarMetadata, EventCategory};

use super::datetime::format_utc;
use super::escape::escape_text;
use super::fold::push_folded;

/// Appends one folded, CRLF-terminated content line.
fn push_line(out: &mut String, name: &str, value: &str) {
    push_folded(out, &format!("{name}:{value}"));
}

/// ## Summary
/// Serializes one event as a `VEVENT` block.
///
/// `DTSTAMP` carries the event's last-modified instant so the output is a pure
/// function of the event.
#[must_use]
pub fn encode_event(event: &CalendarEvent) -> String {
    let mut out = String::new();

    push_line(&mut out, "BEGIN", "VEVENT");
    push_line(&mut out, "UID", &event.uid);
    push_line(&mut out, "DTSTAMP", &format_utc(&event.last_modified));
    push_line(&mut out, "DTSTART", &format_utc(&event.start));
    push_line(&mut out, "DTEND", &format_utc(&event.end));
    push_line(&mut out, "SUMMARY", &escape_text(&event.summary));
    if let Some(description) = &event.description {
        push_line(&mut out, "DESCRIPTION", &escape_text(description));
    }
    if let Some(location) = &event.location {
        push_line(&mut out, "LOCATION", &escape_text(location));
    }
    if let Some(contact) = &event.contact {
        push_line(&mut out, "CONTACT", &escape_text(contact));
    }
    push_line(&mut out, "STATUS", event.status.as_str());
    push_line(&mut out, "CATEGORIES", event.category.as_str());
    if event.category == EventCategory::Busy {
        push_line(&mut out, "TRANSP", "OPAQUE");
    }
    push_line(&mut out, "LAST-MODIFIED", &format_utc(&event.last_modified));
    push_line(&mut out, "END", "VEVENT");

    out
}

/// ## Summary
/// Serializes a complete `VCALENDAR` with the given events, in the given order.
///
/// `method` is emitted as `METHOD` when present; subscription feeds pass `PUBLISH`,
/// `CalDAV` object resources pass `None`.
#[must_use]
pub fn encode_calendar(
    events: &[CalendarEvent],
    metadata: &CalendarMetadata,
    method: Option<&str>,
) -> String {
    let mut out = String::new();

    push_line(&mut out, "BEGIN", "VCALENDAR");
    push_line(&mut out, "VERSION", "2.0");
    push_line(&mut out, "PRODID", PRODID);
    push_line(&mut out, "CALSCALE", "GREGORIAN");
    if let Some(method) = method {
        push_line(&mut out, "METHOD", method);
    }
    push_line(&mut out, "X-WR-CALNAME", &escape_text(&metadata.name));
    push_line(&mut out, "X-WR-CALDESC", &escape_text(&metadata.description));
    push_line(&mut out, "X-WR-TIMEZONE", &metadata.timezone);
    if metadata.refresh_interval_minutes > 0 {
        let duration = format!("PT{}M", metadata.refresh_interval_minutes);
        push_line(&mut out, "REFRESH-INTERVAL;VALUE=DURATION", &duration);
        push_line(&mut out, "X-PUBLISHED-TTL", &duration);
    }

    for event in events {
        out.push_str(&encode_event(event));
    }

    push_line(&mut out, "END", "VCALENDAR");

    out
}
