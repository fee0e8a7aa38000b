use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the weather-data client.
///
/// Variants carry the short endpoint name (`"forecast"`, `"weather"`, ...)
/// rather than the full request URL so the API key never ends up in error
/// messages or logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to construct HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("network request failed for '{endpoint}'")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request for '{endpoint}' failed with status {status}")]
    HttpStatus {
        endpoint: &'static str,
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode '{endpoint}' response body")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
