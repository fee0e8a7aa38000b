//! The 5-day forecast panel.

use crate::api::client::WeatherApi;
use crate::api::error::ApiError;
use crate::api::models::ForecastEntry;
use crate::location::LatLon;
use crate::series::reshape::{reshape_forecast, ForecastSeries};
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::watch;

/// State of the temperature/precipitation chart panel.
pub struct ForecastPanel {
    api: Arc<WeatherApi>,
    view: Option<ForecastSeries>,
    generation: u64,
    ready_tx: watch::Sender<bool>,
}

impl ForecastPanel {
    pub(crate) fn new(api: Arc<WeatherApi>, ready_tx: watch::Sender<bool>) -> Self {
        Self {
            api,
            view: None,
            generation: 0,
            ready_tx,
        }
    }

    /// Fetches the 5-day forecast for `position` and rebuilds the view.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the fetch; the previous view is left
    /// untouched on failure.
    pub async fn refresh(&mut self, position: LatLon) -> Result<(), ApiError> {
        let generation = self.begin_refresh();
        let entries = self.api.forecast(position).await?;
        self.apply_forecast(generation, entries);
        Ok(())
    }

    pub(crate) fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub(crate) fn apply_forecast(&mut self, generation: u64, entries: Vec<ForecastEntry>) {
        if generation != self.generation {
            debug!(
                "dropping stale forecast response (generation {} < {})",
                generation, self.generation
            );
            return;
        }

        let series = reshape_forecast(&entries);
        info!("forecast panel loaded: {} entries", series.labels.len());
        self.view = Some(series);
        self.ready_tx.send_replace(true);
    }

    /// The chart-ready forecast series, once data has loaded.
    pub fn view(&self) -> Option<&ForecastSeries> {
        self.view.as_ref()
    }
}
