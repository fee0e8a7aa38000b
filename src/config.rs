//! Process-wide configuration, read once at startup.

use std::env;
use thiserror::Error;

/// Environment variable holding the weather provider base URL.
pub const ENV_API_URL: &str = "SKYCAST_API_URL";
/// Environment variable holding the weather provider API key.
pub const ENV_API_KEY: &str = "SKYCAST_API_KEY";
/// Environment variable overriding the reverse-geocoding endpoint.
pub const ENV_GEOCODE_URL: &str = "SKYCAST_GEOCODE_URL";
/// Environment variable selecting the description language.
pub const ENV_LANG: &str = "SKYCAST_LANG";

const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/reverse";
const DEFAULT_LANG: &str = "en";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("environment variable {0} is not valid unicode")]
    InvalidUnicode(&'static str),
}

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Weather provider base URL, e.g. `https://api.openweathermap.org/data/2.5`.
    pub api_url: String,
    /// Weather provider API key.
    pub api_key: String,
    /// Reverse-geocoding `/reverse` endpoint.
    pub geocode_url: String,
    /// Language for textual weather descriptions.
    pub lang: String,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// `SKYCAST_API_URL` and `SKYCAST_API_KEY` are required;
    /// `SKYCAST_GEOCODE_URL` and `SKYCAST_LANG` fall back to the public
    /// Nominatim endpoint and `"en"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] for an absent required variable
    /// and [`ConfigError::InvalidUnicode`] for one that cannot be read.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: required_var(ENV_API_URL)?,
            api_key: required_var(ENV_API_KEY)?,
            geocode_url: optional_var(ENV_GEOCODE_URL)?
                .unwrap_or_else(|| DEFAULT_GEOCODE_URL.to_string()),
            lang: optional_var(ENV_LANG)?.unwrap_or_else(|| DEFAULT_LANG.to_string()),
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    optional_var(name)?.ok_or(ConfigError::MissingVar(name))
}

fn optional_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidUnicode(name)),
    }
}
