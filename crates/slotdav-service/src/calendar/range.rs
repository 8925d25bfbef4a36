use chrono::{Days, NaiveDate, NaiveTime};
use slotdav_store::model::DateRange;

use crate::error::{ServiceError, ServiceResult};

fn parse_date(name: &str, value: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| ServiceError::ValidationError(format!("invalid {name} date '{value}': {e}")))
}

/// ## Summary
/// Parses the `start`/`end` feed parameters (`YYYY-MM-DD`).
///
/// `start` is inclusive from 00:00 UTC and `end` includes the whole day. Returns
/// `None` when neither bound is given.
///
/// ## Errors
/// Returns `ValidationError` for a malformed date or an `end` before `start`.
pub fn parse_feed_range(start: Option<&str>, end: Option<&str>) -> ServiceResult<Option<DateRange>> {
    let start = start.filter(|s| !s.trim().is_empty());
    let end = end.filter(|s| !s.trim().is_empty());
    if start.is_none() && end.is_none() {
        return Ok(None);
    }

    let lower = start
        .map(|s| parse_date("start", s))
        .transpose()?
        .map(|d| d.and_time(NaiveTime::MIN).and_utc());
    let upper = end
        .map(|s| {
            parse_date("end", s)?
                .checked_add_days(Days::new(1))
                .ok_or_else(|| ServiceError::ValidationError(format!("end date '{s}' out of range")))
        })
        .transpose()?
        .map(|d| d.and_time(NaiveTime::MIN).and_utc());

    if let (Some(lower), Some(upper)) = (lower, upper)
        && upper <= lower
    {
        return Err(ServiceError::ValidationError(
            "end date precedes start date".to_string(),
        ));
    }

    Ok(Some(DateRange::new(lower, upper)))
}
