//! Serde models mirroring the wire format of the weather-data provider.
//!
//! The structs follow the JSON shapes of the OpenWeatherMap-style endpoints
//! (`/forecast`, `/weather`, `/air_pollution/history`); field names match the
//! wire names so no rename attributes are needed beyond the nested wrappers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One 3-hour step of the 5-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp (seconds) of the forecast slot.
    pub dt: i64,
    /// The same instant as text, `YYYY-MM-DD HH:MM:SS`.
    pub dt_txt: String,
    /// Probability of precipitation, 0.0 to 1.0.
    #[serde(default)]
    pub pop: f64,
    pub main: ForecastMain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// Current conditions at a location, as returned by the `weather` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub weather: Vec<WeatherSummary>,
    pub main: TemperatureReadings,
    pub wind: Wind,
    pub clouds: Clouds,
}

/// Headline weather group ("Clouds", "Rain", ...) with description and icon code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    pub all: f64,
}

/// One timestamped air-quality reading.
///
/// `components` maps pollutant codes (`co`, `nh3`, `no`, `no2`, `o3`, `pm2_5`,
/// `pm10`, `so2`) to concentrations in μg/m³. The map is kept generic rather
/// than typed per pollutant: the reshape step iterates whatever codes the
/// provider sent, and a code may be absent from an individual sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirSample {
    /// Unix timestamp (seconds) of the reading.
    pub dt: i64,
    pub main: AirQualityIndex,
    #[serde(default)]
    pub components: BTreeMap<String, f64>,
}

impl AirSample {
    /// The air-quality index of this reading (1 = good .. 5 = very poor).
    pub fn aqi(&self) -> i64 {
        self.main.aqi
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityIndex {
    pub aqi: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AirPollutionResponse {
    pub list: Vec<AirSample>,
}
