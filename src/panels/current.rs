//! The current-conditions table panel.
//!
//! Lays the fetched reading out as label/value rows ready for a plain HTML
//! or terminal table. The panel renders nothing at all while no data is
//! present; it does not gate the dashboard's global loading indicator.

use crate::api::client::WeatherApi;
use crate::api::error::ApiError;
use crate::api::models::CurrentConditions;
use crate::location::LatLon;
use chrono::Local;
use log::info;
use std::sync::Arc;

/// State of the current-conditions panel.
pub struct CurrentConditionsPanel {
    api: Arc<WeatherApi>,
    lang: String,
    data: Option<CurrentConditions>,
}

impl CurrentConditionsPanel {
    pub(crate) fn new(api: Arc<WeatherApi>, lang: impl Into<String>) -> Self {
        Self {
            api,
            lang: lang.into(),
            data: None,
        }
    }

    /// Fetches current conditions for `position`.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the fetch; the previous reading is left
    /// untouched on failure.
    pub async fn refresh(&mut self, position: LatLon) -> Result<(), ApiError> {
        let current = self.api.current_weather(position, &self.lang).await?;
        info!(
            "current-conditions panel loaded: {}",
            current
                .weather
                .first()
                .map(|w| w.main.as_str())
                .unwrap_or("unknown")
        );
        self.data = Some(current);
        Ok(())
    }

    /// The raw fetched reading, if any.
    pub fn data(&self) -> Option<&CurrentConditions> {
        self.data.as_ref()
    }

    /// The provider's icon code for the headline condition, e.g. `"04d"`.
    pub fn icon(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.weather.first())
            .map(|w| w.icon.as_str())
    }

    /// Today's date formatted for the panel header, e.g. "Tuesday 14 November".
    pub fn header_date(&self) -> String {
        Local::now().format("%A %-d %B").to_string()
    }

    /// The table rows, in display order. Empty while no data is loaded.
    pub fn rows(&self) -> Vec<(String, String)> {
        let Some(data) = &self.data else {
            return Vec::new();
        };

        let mut rows = Vec::with_capacity(10);
        if let Some(headline) = data.weather.first() {
            rows.push(("Weather".to_string(), headline.main.clone()));
            rows.push(("Description".to_string(), headline.description.clone()));
        }
        rows.push(("Temperature".to_string(), format!("{} °C", data.main.temp)));
        rows.push((
            "Feels like".to_string(),
            format!("{} °C", data.main.feels_like),
        ));
        rows.push((
            "Minimum temperature".to_string(),
            format!("{} °C", data.main.temp_min),
        ));
        rows.push((
            "Maximum temperature".to_string(),
            format!("{} °C", data.main.temp_max),
        ));
        rows.push(("Humidity".to_string(), format!("{} %", data.main.humidity)));
        rows.push(("Wind speed".to_string(), format!("{} m/s", data.wind.speed)));
        rows.push(("Wind direction".to_string(), format!("{} °", data.wind.deg)));
        rows.push(("Cloudiness".to_string(), format!("{} %", data.clouds.all)));
        rows
    }
}
