//! Day-level deduplication of air-quality samples.
//!
//! The provider returns hourly samples; the chart wants one point per
//! calendar day. The day key is derived in the *caller's* timezone, not by
//! UTC truncation, so that bucket boundaries line up with the user-facing
//! date labels.

use crate::api::models::AirSample;
use crate::series::calendar_day;
use chrono::TimeZone;
use std::collections::HashSet;

/// Reduces `samples` to one entry per distinct calendar day in `tz`.
///
/// The first sample seen for a day wins; later samples for the same day are
/// discarded. Input order of the surviving samples is preserved. Empty input
/// yields empty output.
///
/// Samples whose timestamp is outside chrono's representable range are
/// dropped.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use skycast::{dedup_by_day, AirSample};
///
/// let samples: Vec<AirSample> = serde_json::from_str(r#"[
///     { "dt": 0,     "main": { "aqi": 1 }, "components": {} },
///     { "dt": 3600,  "main": { "aqi": 2 }, "components": {} },
///     { "dt": 90000, "main": { "aqi": 3 }, "components": {} }
/// ]"#).unwrap();
///
/// let daily = dedup_by_day(&samples, &Utc);
/// assert_eq!(daily.len(), 2);
/// assert_eq!(daily[0].aqi(), 1); // first sample of day one wins
/// assert_eq!(daily[1].aqi(), 3);
/// ```
pub fn dedup_by_day<Tz: TimeZone>(samples: &[AirSample], tz: &Tz) -> Vec<AirSample> {
    let mut seen = HashSet::new();
    let mut daily = Vec::new();

    for sample in samples {
        let Some(day) = calendar_day(sample.dt, tz) else {
            continue;
        };
        if seen.insert(day) {
            daily.push(sample.clone());
        }
    }

    daily
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use std::collections::BTreeMap;

    fn sample(dt: i64, aqi: i64) -> AirSample {
        serde_json::from_value(serde_json::json!({
            "dt": dt,
            "main": { "aqi": aqi },
            "components": BTreeMap::<String, f64>::new()
        }))
        .unwrap()
    }

    const DAY: i64 = 86_400;

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(dedup_by_day(&[], &Utc).is_empty());
    }

    #[test]
    fn first_sample_per_day_wins_in_input_order() {
        // Jan 1, Jan 1 (later hour), Jan 2
        let samples = vec![sample(0, 1), sample(3_600, 2), sample(DAY + 60, 3)];

        let daily = dedup_by_day(&samples, &Utc);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].aqi(), 1);
        assert_eq!(daily[1].aqi(), 3);
    }

    #[test]
    fn output_never_longer_than_input() {
        let samples: Vec<AirSample> = (0..200).map(|i| sample(i * 7_200, i)).collect();
        let daily = dedup_by_day(&samples, &Utc);
        assert!(daily.len() <= samples.len());

        let mut days: Vec<_> = daily
            .iter()
            .map(|s| calendar_day(s.dt, &Utc).unwrap())
            .collect();
        let unique_before = days.len();
        days.dedup();
        assert_eq!(days.len(), unique_before, "one sample per distinct day");
    }

    #[test]
    fn day_boundary_follows_the_given_timezone() {
        // 23:30 and 00:30 UTC straddle midnight in UTC but fall on the same
        // calendar day at UTC-5.
        let late = sample(DAY - 1_800, 1);
        let early = sample(DAY + 1_800, 2);
        let samples = vec![late, early];

        let utc_daily = dedup_by_day(&samples, &Utc);
        assert_eq!(utc_daily.len(), 2);

        let bogota = FixedOffset::west_opt(5 * 3_600).unwrap();
        let local_daily = dedup_by_day(&samples, &bogota);
        assert_eq!(local_daily.len(), 1);
        assert_eq!(local_daily[0].aqi(), 1);
    }
}
