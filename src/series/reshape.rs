//! Reshaping fetched records into the parallel arrays the chart renderer
//! consumes.

use crate::api::models::{AirSample, ForecastEntry};
use crate::series::month_day_label;
use chrono::{NaiveDateTime, TimeZone};
use std::collections::BTreeMap;

/// Series key holding the air-quality index, alongside the pollutant codes.
pub const AQI_SERIES: &str = "aqi";

/// Chart-ready parallel arrays for the air-quality line chart.
///
/// Position *i* across every series corresponds to the same source sample.
/// A pollutant series *may* be shorter than `date_labels`: when a sample's
/// `components` map omits a code, nothing is appended to that series for the
/// sample. That mirrors the upstream behavior and is left to the caller to
/// handle (see `missing_pollutant_leaves_series_short` in the tests).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesSet {
    /// "Month D" label per sample, in input order.
    pub date_labels: Vec<String>,
    /// Values keyed by pollutant code, plus [`AQI_SERIES`].
    pub series: BTreeMap<String, Vec<f64>>,
}

impl SeriesSet {
    /// True when no samples were reshaped.
    pub fn is_empty(&self) -> bool {
        self.date_labels.is_empty()
    }
}

/// Reshapes filtered air-quality samples into one [`SeriesSet`].
///
/// For each sample, in order: the AQI is appended to the [`AQI_SERIES`]
/// series, every pollutant present in `components` is appended to its keyed
/// series, and a "Month D" label (formatted in `tz`) is appended to
/// `date_labels`. Pure function of its input; rebuilding from the same
/// samples yields an identical value.
pub fn reshape_air_quality<Tz: TimeZone>(samples: &[AirSample], tz: &Tz) -> SeriesSet {
    let mut set = SeriesSet::default();

    for sample in samples {
        set.series
            .entry(AQI_SERIES.to_string())
            .or_default()
            .push(sample.aqi() as f64);

        for (code, value) in &sample.components {
            set.series.entry(code.clone()).or_default().push(*value);
        }

        set.date_labels.push(month_day_label(sample.dt, tz));
    }

    set
}

/// Chart-ready parallel arrays for the temperature/precipitation chart.
///
/// All three vectors always share the same length: the forecast endpoint
/// returns complete records, so no per-field skipping can occur here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastSeries {
    /// "Month D - HH:MM" label per entry.
    pub labels: Vec<String>,
    /// Temperature in °C per entry.
    pub temperatures: Vec<f64>,
    /// Probability of precipitation (0.0 to 1.0) per entry.
    pub precipitation: Vec<f64>,
}

/// Reshapes 5-day forecast entries into a [`ForecastSeries`].
///
/// One output position per input record; no deduplication and no interval
/// filtering, since the provider already returns a fixed 3-hour-step series.
/// Labels come from the entry's `dt_txt` text timestamp; an unparseable
/// `dt_txt` is carried through verbatim so positions stay aligned.
pub fn reshape_forecast(entries: &[ForecastEntry]) -> ForecastSeries {
    let mut series = ForecastSeries::default();

    for entry in entries {
        let label = match NaiveDateTime::parse_from_str(&entry.dt_txt, "%Y-%m-%d %H:%M:%S") {
            Ok(dt) => dt.format("%B %-d - %H:%M").to_string(),
            Err(_) => entry.dt_txt.clone(),
        };
        series.labels.push(label);
        series.temperatures.push(entry.main.temp);
        series.precipitation.push(entry.pop);
    }

    series
}
