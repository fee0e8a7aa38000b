pub mod bucket;
pub mod interval;
pub mod reshape;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Converts unix seconds to a datetime in `tz`.
///
/// Returns `None` only for timestamps outside chrono's representable range.
pub(crate) fn datetime_at<Tz: TimeZone>(unix: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    Some(DateTime::<Utc>::from_timestamp(unix, 0)?.with_timezone(tz))
}

/// The calendar date of a unix timestamp in `tz`.
pub(crate) fn calendar_day<Tz: TimeZone>(unix: i64, tz: &Tz) -> Option<NaiveDate> {
    datetime_at(unix, tz).map(|dt| dt.date_naive())
}

/// Formats a unix timestamp as a "Month D" chart label, e.g. "November 14".
pub(crate) fn month_day_label<Tz: TimeZone>(unix: i64, tz: &Tz) -> String {
    match datetime_at(unix, tz) {
        Some(dt) => dt.naive_local().format("%B %-d").to_string(),
        // Out-of-range timestamps keep the raw value so labels stay aligned
        // with the value series.
        None => unix.to_string(),
    }
}
