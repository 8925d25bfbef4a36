use chrono::{DateTime, Utc};

/// Optional bounds on listed records.
///
/// `start` is inclusive and `end` exclusive; a record is in range iff it overlaps
/// the half-open interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    #[must_use]
    pub const fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Whether `[start, end)` of a record overlaps this range.
    #[must_use]
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start.is_none_or(|lower| end > lower) && self.end.is_none_or(|upper| start < upper)
    }
}
