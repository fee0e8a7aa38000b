//! Reverse geocoding: coordinates to a "City, Country" display string.
//!
//! Talks to a Nominatim-shaped endpoint. No API key is involved, but the
//! service requires an identifying User-Agent.

use crate::location::error::LocationError;
use crate::location::LatLon;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct Address {
    city: Option<String>,
    // Smaller places report `town` instead of `city`.
    town: Option<String>,
    country: Option<String>,
}

/// Client for the reverse-geocoding endpoint.
#[derive(Debug)]
pub struct ReverseGeocoder {
    http: Client,
    base_url: String,
}

impl ReverseGeocoder {
    /// Creates a geocoder against `base_url` (the `/reverse` endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LocationError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(LocationError::Network)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Resolves `position` to a "City, Country" display name.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::MissingAddress`] when the response carries no
    /// city/town or no country, and the usual network/status/decode variants
    /// otherwise.
    pub async fn display_name(&self, position: LatLon) -> Result<String, LocationError> {
        debug!("reverse geocoding ({}, {})", position.0, position.1);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("format", "json".to_string()),
                ("lat", position.0.to_string()),
                ("lon", position.1.to_string()),
            ])
            .send()
            .await
            .map_err(LocationError::Network)?;

        let response = response
            .error_for_status()
            .map_err(|source| match source.status() {
                Some(status) => LocationError::HttpStatus { status, source },
                None => LocationError::Network(source),
            })?;

        let body: GeocodeResponse = response.json().await.map_err(LocationError::Decode)?;

        let address = body.address.ok_or(LocationError::MissingAddress)?;
        let city = address
            .city
            .or(address.town)
            .ok_or(LocationError::MissingAddress)?;
        let country = address.country.ok_or(LocationError::MissingAddress)?;

        Ok(format!("{city}, {country}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn resolves_city_and_country() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "address": { "city": "Bogotá", "country": "Colombia" }
            })))
            .mount(&server)
            .await;

        let geocoder = ReverseGeocoder::new(format!("{}/reverse", server.uri())).unwrap();
        let name = geocoder
            .display_name(LatLon(4.6953937, -74.1240992))
            .await
            .unwrap();

        assert_eq!(name, "Bogotá, Colombia");
    }

    #[tokio::test]
    async fn falls_back_to_town_when_city_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "address": { "town": "Girardot", "country": "Colombia" }
            })))
            .mount(&server)
            .await;

        let geocoder = ReverseGeocoder::new(format!("{}/reverse", server.uri())).unwrap();
        let name = geocoder.display_name(LatLon(4.3, -74.8)).await.unwrap();

        assert_eq!(name, "Girardot, Colombia");
    }

    #[tokio::test]
    async fn missing_address_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let geocoder = ReverseGeocoder::new(format!("{}/reverse", server.uri())).unwrap();
        let err = geocoder.display_name(LatLon(0.0, 160.0)).await.unwrap_err();

        assert!(matches!(err, LocationError::MissingAddress));
    }
}
