//! REPORT request types.

use chrono::{DateTime, Utc};

use super::href::Href;
use super::namespace::QName;

/// A parsed REPORT request.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub report_type: ReportType,
}

/// The reports the gateway understands.
#[derive(Debug, Clone)]
pub enum ReportType {
    CalendarQuery(CalendarQuery),
    CalendarMultiget(CalendarMultiget),
    /// Any other report; carries the root element's local name.
    Unsupported(String),
}

/// `CALDAV:calendar-query`.
#[derive(Debug, Clone, Default)]
pub struct CalendarQuery {
    /// Requested properties; empty means the default event property set.
    pub properties: Vec<QName>,
    /// `CALDAV:time-range` from the filter, if any.
    pub time_range: Option<TimeRange>,
}

/// `CALDAV:calendar-multiget`.
#[derive(Debug, Clone, Default)]
pub struct CalendarMultiget {
    pub properties: Vec<QName>,
    pub hrefs: Vec<Href>,
}

/// A half-open time interval; either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// Returns whether `[start, end)` of an event overlaps this range.
    #[must_use]
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start.is_none_or(|range_start| end > range_start)
            && self.end.is_none_or(|range_end| start < range_end)
    }
}

impl ReportRequest {
    /// Returns the properties the client asked for.
    #[must_use]
    pub fn properties(&self) -> &[QName] {
        match &self.report_type {
            ReportType::CalendarQuery(q) => &q.properties,
            ReportType::CalendarMultiget(m) => &m.properties,
            ReportType::Unsupported(_) => &[],
        }
    }
}
