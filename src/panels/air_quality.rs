//! The air-quality history panel.
//!
//! Owns the 90-day sample history (already bucketed to one sample per day),
//! the three selectable intervals, and the chart-ready [`SeriesSet`] derived
//! from the active interval. The view is rebuilt in full on every data or
//! selection change, never patched incrementally.

use crate::api::client::WeatherApi;
use crate::api::error::ApiError;
use crate::api::models::AirSample;
use crate::location::LatLon;
use crate::series::bucket::dedup_by_day;
use crate::series::interval::{build_intervals, filter_to_interval, Interval, WINDOW_SECONDS};
use crate::series::reshape::{reshape_air_quality, SeriesSet};
use chrono::{Local, Utc};
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::watch;

/// Index of the interval selected when data first loads: the most recent one.
pub const DEFAULT_INTERVAL: usize = 2;

/// State of the air-quality chart panel.
pub struct AirQualityPanel {
    api: Arc<WeatherApi>,
    /// Day-bucketed samples covering the full 90-day window.
    samples: Vec<AirSample>,
    intervals: Vec<Interval>,
    selected: usize,
    view: Option<SeriesSet>,
    /// Bumped on every refresh; responses from an older refresh are stale
    /// and must not overwrite newer state.
    generation: u64,
    ready_tx: watch::Sender<bool>,
}

impl AirQualityPanel {
    pub(crate) fn new(api: Arc<WeatherApi>, ready_tx: watch::Sender<bool>) -> Self {
        Self {
            api,
            samples: Vec::new(),
            intervals: Vec::new(),
            selected: DEFAULT_INTERVAL,
            view: None,
            generation: 0,
            ready_tx,
        }
    }

    /// Fetches the last 90 days of air-quality history for `position` and
    /// rebuilds the panel state from it.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the fetch; the previous panel state is
    /// left untouched on failure.
    pub async fn refresh(&mut self, position: LatLon) -> Result<(), ApiError> {
        let generation = self.begin_refresh();
        let now = Utc::now().timestamp();
        let samples = self
            .api
            .air_pollution_history(position, now - WINDOW_SECONDS, now)
            .await?;
        self.apply_history(generation, samples, now);
        Ok(())
    }

    /// Marks the start of a refresh and returns its generation token.
    pub(crate) fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Installs a fetched history, unless a newer refresh has started since
    /// `generation` was issued.
    pub(crate) fn apply_history(&mut self, generation: u64, samples: Vec<AirSample>, now: i64) {
        if generation != self.generation {
            debug!(
                "dropping stale air-quality response (generation {} < {})",
                generation, self.generation
            );
            return;
        }

        self.samples = dedup_by_day(&samples, &Local);
        self.intervals = build_intervals(now - WINDOW_SECONDS, now, &Local);
        self.selected = DEFAULT_INTERVAL;
        self.rebuild_view();
        info!(
            "air-quality panel loaded: {} daily samples over {} intervals",
            self.samples.len(),
            self.intervals.len()
        );
        self.ready_tx.send_replace(true);
    }

    /// Selects one of the three intervals and rebuilds the view for it.
    ///
    /// Out-of-range indices are ignored (there are only three buttons).
    pub fn select_interval(&mut self, index: usize) {
        if index >= self.intervals.len() {
            debug!("ignoring out-of-range interval selection {index}");
            return;
        }
        self.selected = index;
        self.rebuild_view();
    }

    fn rebuild_view(&mut self) {
        let Some(interval) = self.intervals.get(self.selected) else {
            self.view = None;
            return;
        };
        let windowed = filter_to_interval(&self.samples, interval);
        self.view = Some(reshape_air_quality(&windowed, &Local));
    }

    /// The chart-ready series for the active interval, once data has loaded.
    pub fn view(&self) -> Option<&SeriesSet> {
        self.view.as_ref()
    }

    /// The three selectable intervals (empty before the first load).
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Index of the active interval.
    pub fn selected_interval(&self) -> usize {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DAY: i64 = 86_400;

    fn panel() -> AirQualityPanel {
        let api = Arc::new(
            WeatherApi::builder()
                .base_url("http://127.0.0.1:1")
                .api_key("unused")
                .build()
                .unwrap(),
        );
        let (tx, _rx) = watch::channel(false);
        AirQualityPanel::new(api, tx)
    }

    fn sample(dt: i64, aqi: i64) -> AirSample {
        serde_json::from_value(json!({
            "dt": dt, "main": { "aqi": aqi }, "components": { "co": aqi as f64 }
        }))
        .unwrap()
    }

    /// 95 days of daily samples, AQI ascending 1..=95 from oldest to newest.
    fn daily_history(now: i64) -> Vec<AirSample> {
        (0..95)
            .rev()
            .map(|k| sample(now - k * DAY, 95 - k))
            .collect()
    }

    #[test]
    fn load_selects_the_most_recent_interval_and_windows_it() {
        let mut panel = panel();
        let now = Utc::now().timestamp();

        let generation = panel.begin_refresh();
        panel.apply_history(generation, daily_history(now), now);

        assert_eq!(panel.selected_interval(), DEFAULT_INTERVAL);
        let view = panel.view().expect("view built on load");

        // Interval 2 spans the last 30 days: samples at now - k*DAY for
        // k = 0..=30, so 31 points.
        let interval = &panel.intervals()[2];
        let expected_days = (now - interval.start) / DAY + 1;
        assert_eq!(view.series["aqi"].len(), expected_days as usize);

        // The first point in the window is the oldest day inside it,
        // 30 days back, which carries AQI 95 - 30.
        assert_eq!(view.series["aqi"][0], (95 - 30) as f64);
        assert_eq!(view.date_labels.len(), view.series["aqi"].len());
    }

    #[test]
    fn reselecting_an_interval_rebuilds_the_view_in_full() {
        let mut panel = panel();
        let now = Utc::now().timestamp();
        let generation = panel.begin_refresh();
        panel.apply_history(generation, daily_history(now), now);

        let recent = panel.view().unwrap().clone();
        panel.select_interval(0);
        let oldest = panel.view().unwrap().clone();
        assert_ne!(recent, oldest);

        panel.select_interval(2);
        assert_eq!(panel.view().unwrap(), &recent);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut panel = panel();
        let now = Utc::now().timestamp();
        let generation = panel.begin_refresh();
        panel.apply_history(generation, daily_history(now), now);

        panel.select_interval(7);
        assert_eq!(panel.selected_interval(), DEFAULT_INTERVAL);
        assert!(panel.view().is_some());
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_state() {
        let mut panel = panel();
        let now = Utc::now().timestamp();

        let stale = panel.begin_refresh();
        let fresh = panel.begin_refresh();

        panel.apply_history(fresh, daily_history(now), now);
        let loaded = panel.view().unwrap().clone();

        // A slow response from the earlier refresh arrives afterwards.
        panel.apply_history(stale, vec![sample(now, 1)], now);

        assert_eq!(panel.view().unwrap(), &loaded);
    }

    #[test]
    fn ready_signal_fires_once_data_is_applied() {
        let api = Arc::new(
            WeatherApi::builder()
                .base_url("http://127.0.0.1:1")
                .api_key("unused")
                .build()
                .unwrap(),
        );
        let (tx, rx) = watch::channel(false);
        let mut panel = AirQualityPanel::new(api, tx);
        assert!(!*rx.borrow());

        let now = Utc::now().timestamp();
        let generation = panel.begin_refresh();
        panel.apply_history(generation, daily_history(now), now);

        assert!(*rx.borrow());
    }
}
