//! REPORT request XML parsing.

use quick_xml::Reader;
use quick_xml::events::Event;

use super::error::{ParseError, ParseResult};
use super::{Prefixes, PropList, attribute, local_name};
use crate::rfc::dav::core::{
    CalendarMultiget, CalendarQuery, Href, ReportRequest, ReportType, TimeRange,
};
use crate::rfc::ical::datetime::parse_utc;

/// Parses a REPORT request body.
///
/// ## Summary
/// Dispatches on the root element. `calendar-query` and `calendar-multiget` are
/// parsed; any other root yields `ReportType::Unsupported` so callers can answer
/// with "not implemented" rather than "bad request".
///
/// ## Errors
/// Returns an error if the XML is malformed, the body is empty, or a
/// `time-range` bound is not a UTC instant.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_report(xml: &[u8]) -> ParseResult<ReportRequest> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let root = local_name(e)?;
                let report_type = match root.as_str() {
                    "calendar-query" => ReportType::CalendarQuery(parse_calendar_query(xml)?),
                    "calendar-multiget" => {
                        ReportType::CalendarMultiget(parse_calendar_multiget(xml)?)
                    }
                    _ => ReportType::Unsupported(root),
                };
                return Ok(ReportRequest { report_type });
            }
            Event::Eof => return Err(ParseError::missing_element("report root element")),
            _ => {}
        }
    }
}

/// Parses a calendar-query report.
///
/// Only the first `time-range` inside the filter is honored; other filter
/// elements are accepted and ignored.
fn parse_calendar_query(xml: &[u8]) -> ParseResult<CalendarQuery> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut prefixes = Prefixes::default();
    let mut query = CalendarQuery::default();
    let mut props = PropList::default();
    let mut in_filter = false;

    loop {
        buf.clear();
        let event = reader.read_event_into(&mut buf)?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                prefixes.declare(e)?;
                if props.is_open() {
                    if props.start(is_empty) {
                        query.properties.push(prefixes.qualify(e)?);
                    }
                    continue;
                }
                match local_name(e)?.as_str() {
                    "prop" if !in_filter && !is_empty => props.enter(),
                    "filter" => in_filter = !is_empty,
                    "time-range" if in_filter && query.time_range.is_none() => {
                        query.time_range = Some(parse_time_range(e)?);
                    }
                    _ => {}
                }
            }
            Event::End(ref e) => {
                if props.is_open() {
                    props.end();
                } else if e.local_name().as_ref() == b"filter" {
                    in_filter = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(query)
}

/// Parses a calendar-multiget report.
fn parse_calendar_multiget(xml: &[u8]) -> ParseResult<CalendarMultiget> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut prefixes = Prefixes::default();
    let mut multiget = CalendarMultiget::default();
    let mut props = PropList::default();
    let mut in_href = false;
    let mut text_buf = String::new();

    loop {
        buf.clear();
        let event = reader.read_event_into(&mut buf)?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                prefixes.declare(e)?;
                if props.is_open() {
                    if props.start(is_empty) {
                        multiget.properties.push(prefixes.qualify(e)?);
                    }
                    continue;
                }
                match local_name(e)?.as_str() {
                    "prop" if !is_empty => props.enter(),
                    "href" if !is_empty => {
                        in_href = true;
                        text_buf.clear();
                    }
                    _ => {}
                }
            }
            Event::Text(ref e) => {
                if in_href {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    text_buf.push_str(&decoded);
                }
            }
            Event::End(ref e) => {
                if props.is_open() {
                    props.end();
                    continue;
                }
                match std::str::from_utf8(e.local_name().as_ref())? {
                    "href" if in_href => {
                        in_href = false;
                        let href = text_buf.trim();
                        if !href.is_empty() {
                            multiget.hrefs.push(Href::new(href));
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(multiget)
}

/// Parses the `start`/`end` attributes of a `time-range` element.
fn parse_time_range(e: &quick_xml::events::BytesStart<'_>) -> ParseResult<TimeRange> {
    let parse_bound = |name: &str| -> ParseResult<Option<chrono::DateTime<chrono::Utc>>> {
        attribute(e, name)?
            .map(|value| {
                parse_utc(&value).map_err(|err| {
                    tracing::debug!(error = %err, attribute = name, "Invalid time-range bound");
                    ParseError::invalid_value(format!("invalid time-range {name}: {value}"))
                })
            })
            .transpose()
    };

    Ok(TimeRange {
        start: parse_bound("start")?,
        end: parse_bound("end")?,
    })
}
