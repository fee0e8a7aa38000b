use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("geolocation unavailable: {0}")]
    Unavailable(String),

    #[error("network request failed for reverse geocoding")]
    Network(#[source] reqwest::Error),

    #[error("reverse geocoding request failed with status {status}")]
    HttpStatus {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode reverse geocoding response")]
    Decode(#[source] reqwest::Error),

    #[error("reverse geocoding response carried no usable address")]
    MissingAddress,
}
