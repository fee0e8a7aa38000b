//! HTTP client for the weather-data provider.
//!
//! One [`WeatherApi`] instance is shared by every dashboard panel. It issues
//! plain GET requests against the provider's `forecast`, `weather` and
//! `air_pollution/history` endpoints and deserializes the JSON bodies into
//! the models in [`crate::api::models`].

use crate::api::error::ApiError;
use crate::api::models::{
    AirPollutionResponse, AirSample, CurrentConditions, ForecastEntry, ForecastResponse,
};
use crate::location::LatLon;
use bon::bon;
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the weather-data provider.
///
/// Create an instance with the builder, then share it behind an `Arc`:
///
/// ```no_run
/// # use skycast::{WeatherApi, ApiError};
/// # fn run() -> Result<(), ApiError> {
/// let api = WeatherApi::builder()
///     .base_url("https://api.openweathermap.org/data/2.5")
///     .api_key("secret")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WeatherApi {
    http: Client,
    base_url: String,
    api_key: String,
}

#[bon]
impl WeatherApi {
    /// Creates a new `WeatherApi`.
    ///
    /// # Arguments
    ///
    /// * `.base_url(impl Into<String>)`: **Required.** Provider base URL,
    ///   without a trailing slash.
    /// * `.api_key(impl Into<String>)`: **Required.** Provider API key, sent
    ///   as the `appid` query parameter on every request.
    /// * `.timeout(Duration)`: Optional. Per-request timeout. Defaults to 10s.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the underlying HTTP client cannot
    /// be constructed.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: String,
        #[builder(into)] api_key: String,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetches the 5-day forecast in 3-hour steps for a location.
    ///
    /// Temperatures are requested in metric units. The provider returns a
    /// fixed-length series, so the entries need no client-side windowing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`], [`ApiError::HttpStatus`] or
    /// [`ApiError::Decode`] depending on where the request failed.
    pub async fn forecast(&self, position: LatLon) -> Result<Vec<ForecastEntry>, ApiError> {
        let endpoint = "forecast";
        let response: ForecastResponse = self
            .get_json(
                endpoint,
                &[
                    ("lat", position.0.to_string()),
                    ("lon", position.1.to_string()),
                    ("units", "metric".to_string()),
                ],
            )
            .await?;
        info!(
            "fetched {} forecast entries for ({}, {})",
            response.list.len(),
            position.0,
            position.1
        );
        Ok(response.list)
    }

    /// Fetches current conditions for a location.
    ///
    /// `lang` selects the language of the textual weather description.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`], [`ApiError::HttpStatus`] or
    /// [`ApiError::Decode`] depending on where the request failed.
    pub async fn current_weather(
        &self,
        position: LatLon,
        lang: &str,
    ) -> Result<CurrentConditions, ApiError> {
        self.get_json(
            "weather",
            &[
                ("lat", position.0.to_string()),
                ("lon", position.1.to_string()),
                ("units", "metric".to_string()),
                ("lang", lang.to_string()),
            ],
        )
        .await
    }

    /// Fetches historic air-quality samples for a location.
    ///
    /// `start` and `end` are unix seconds, both inclusive. The provider
    /// returns hourly samples; deduplicating them down to one per day is the
    /// caller's concern (see [`crate::dedup_by_day`]).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`], [`ApiError::HttpStatus`] or
    /// [`ApiError::Decode`] depending on where the request failed.
    pub async fn air_pollution_history(
        &self,
        position: LatLon,
        start: i64,
        end: i64,
    ) -> Result<Vec<AirSample>, ApiError> {
        let response: AirPollutionResponse = self
            .get_json(
                "air_pollution/history",
                &[
                    ("lat", position.0.to_string()),
                    ("lon", position.1.to_string()),
                    ("start", start.to_string()),
                    ("end", end.to_string()),
                ],
            )
            .await?;
        info!(
            "fetched {} air-quality samples for ({}, {})",
            response.list.len(),
            position.0,
            position.1
        );
        Ok(response.list)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| ApiError::Network { endpoint, source })?;

        let response = response.error_for_status().map_err(|source| {
            // error_for_status always carries the status here
            match source.status() {
                Some(status) => ApiError::HttpStatus {
                    endpoint,
                    status,
                    source,
                },
                None => ApiError::Network { endpoint, source },
            }
        })?;

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { endpoint, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> WeatherApi {
        WeatherApi::builder()
            .base_url(server.uri())
            .api_key("test-key")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn forecast_sends_location_and_units() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("lat", "4.6953937"))
            .and(query_param("lon", "-74.1240992"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "list": [
                    { "dt": 1700000000, "dt_txt": "2023-11-14 22:00:00", "pop": 0.4,
                      "main": { "temp": 17.5 } },
                    { "dt": 1700010800, "dt_txt": "2023-11-15 01:00:00", "pop": 0.1,
                      "main": { "temp": 15.2 } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let entries = api
            .forecast(LatLon(4.6953937, -74.1240992))
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].pop, 0.4);
        assert_eq!(entries[1].main.temp, 15.2);
    }

    #[tokio::test]
    async fn current_weather_passes_lang() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("lang", "es"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "weather": [{ "main": "Rain", "description": "light rain", "icon": "10d" }],
                "main": { "temp": 12.0, "feels_like": 11.4, "temp_min": 10.0,
                          "temp_max": 13.5, "humidity": 88 },
                "wind": { "speed": 5.1, "deg": 180 },
                "clouds": { "all": 90 }
            })))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let current = api.current_weather(LatLon(1.0, 2.0), "es").await.unwrap();

        assert_eq!(current.weather[0].main, "Rain");
        assert_eq!(current.wind.deg, 180.0);
    }

    #[tokio::test]
    async fn air_pollution_history_sends_window_bounds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/air_pollution/history"))
            .and(query_param("start", "1692230400"))
            .and(query_param("end", "1700006400"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "list": [
                    { "dt": 1692230400, "main": { "aqi": 1 },
                      "components": { "co": 200.1, "o3": 60.2 } }
                ]
            })))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let samples = api
            .air_pollution_history(LatLon(1.0, 2.0), 1_692_230_400, 1_700_006_400)
            .await
            .unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].aqi(), 1);
    }

    #[tokio::test]
    async fn http_error_surfaces_status_without_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let err = api
            .current_weather(LatLon(1.0, 2.0), "en")
            .await
            .unwrap_err();

        match &err {
            ApiError::HttpStatus {
                endpoint, status, ..
            } => {
                assert_eq!(*endpoint, "weather");
                assert_eq!(status.as_u16(), 401);
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
        // The key must not leak through Display.
        assert!(!err.to_string().contains("test-key"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let err = api.forecast(LatLon(1.0, 2.0)).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { endpoint: "forecast", .. }));
    }
}
