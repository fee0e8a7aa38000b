//! Fixed date intervals windowing the air-quality chart.
//!
//! The chart shows a 90-day history split into three user-selectable ranges
//! of 30 days each. The last range is clamped to "now" instead of the fixed
//! 30-day grid, so its length varies with the moment the window is built.

use crate::api::models::AirSample;
use crate::series::datetime_at;
use chrono::TimeZone;

/// Seconds in one 30-day interval.
pub const MONTH_SECONDS: i64 = 2_592_000;
/// Seconds in the full 90-day history window.
pub const WINDOW_SECONDS: i64 = 3 * MONTH_SECONDS;
/// Number of intervals the window is split into.
pub const INTERVAL_COUNT: usize = 3;

/// A contiguous, inclusive time range with a display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Human-readable "Month D - Month D" range label.
    pub label: String,
    /// Start of the range, unix seconds, inclusive.
    pub start: i64,
    /// End of the range, unix seconds, inclusive.
    pub end: i64,
}

impl Interval {
    /// Whether `unix` falls inside this range. Both bounds are inclusive.
    pub fn contains(&self, unix: i64) -> bool {
        unix >= self.start && unix <= self.end
    }
}

/// Splits `[start, end]` into exactly [`INTERVAL_COUNT`] intervals.
///
/// Interval *i* starts at `start + i * 30 days`. The first two intervals end
/// one second before the next one starts; the last interval ends exactly at
/// `end`, even when that breaks the 30-day grid. The clamp is deliberate:
/// `end` is "now" in the dashboard and the last button must cover everything
/// up to the present.
///
/// Labels are formatted in `tz`, matching the chart's date labels.
pub fn build_intervals<Tz: TimeZone>(start: i64, end: i64, tz: &Tz) -> Vec<Interval> {
    (0..INTERVAL_COUNT as i64)
        .map(|i| {
            let interval_start = start + i * MONTH_SECONDS;
            let interval_end = if i == INTERVAL_COUNT as i64 - 1 {
                end
            } else {
                interval_start + MONTH_SECONDS - 1
            };

            Interval {
                label: format!(
                    "{} - {}",
                    range_bound_label(interval_start, tz),
                    range_bound_label(interval_end, tz)
                ),
                start: interval_start,
                end: interval_end,
            }
        })
        .collect()
}

/// Returns the samples whose timestamp falls within `interval`, in order.
///
/// Both bounds are inclusive; a sample exactly at `interval.start` or
/// `interval.end` is kept.
pub fn filter_to_interval(samples: &[AirSample], interval: &Interval) -> Vec<AirSample> {
    samples
        .iter()
        .filter(|sample| interval.contains(sample.dt))
        .cloned()
        .collect()
}

fn range_bound_label<Tz: TimeZone>(unix: i64, tz: &Tz) -> String {
    match datetime_at(unix, tz) {
        Some(dt) => dt.naive_local().format("%B %-d").to_string(),
        None => unix.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn window_partitions_into_three_contiguous_intervals() {
        let start = 1_700_000_000;
        let end = start + WINDOW_SECONDS;

        let intervals = build_intervals(start, end, &Utc);

        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals[0].start, start);
        assert_eq!(intervals[1].start, intervals[0].end + 1);
        assert_eq!(intervals[2].start, intervals[1].end + 1);
        assert_eq!(intervals[2].end, end);
    }

    #[test]
    fn last_interval_is_clamped_to_end_not_to_the_grid() {
        let start = 1_700_000_000;
        // "now" falls half a day past the fixed 30-day grid.
        let end = start + WINDOW_SECONDS + 43_200;

        let intervals = build_intervals(start, end, &Utc);

        assert_eq!(intervals[2].start, start + 2 * MONTH_SECONDS);
        assert_eq!(intervals[2].end, end);
        assert!(intervals[2].end - intervals[2].start > MONTH_SECONDS);
    }

    #[test]
    fn labels_are_month_day_ranges() {
        // 2023-11-14 22:13:20 UTC
        let start = 1_700_000_000;
        let intervals = build_intervals(start, start + WINDOW_SECONDS, &Utc);

        assert_eq!(intervals[0].label, "November 14 - December 14");
    }

    #[test]
    fn filter_is_inclusive_on_both_bounds() {
        let interval = Interval {
            label: String::new(),
            start: 100,
            end: 200,
        };
        let samples: Vec<AirSample> = [99, 100, 150, 200, 201]
            .iter()
            .map(|&dt| {
                serde_json::from_value(serde_json::json!({
                    "dt": dt, "main": { "aqi": 1 }, "components": {}
                }))
                .unwrap()
            })
            .collect();

        let kept = filter_to_interval(&samples, &interval);

        let kept_dts: Vec<i64> = kept.iter().map(|s| s.dt).collect();
        assert_eq!(kept_dts, vec![100, 150, 200]);
    }
}
