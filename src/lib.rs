mod api;
mod config;
mod dashboard;
mod error;
mod location;
mod panels;
mod render;
mod series;

pub use error::SkycastError;

pub use api::client::WeatherApi;
pub use api::error::ApiError;
pub use api::models::*;

pub use config::{Config, ConfigError};
pub use config::{ENV_API_KEY, ENV_API_URL, ENV_GEOCODE_URL, ENV_LANG};

pub use dashboard::Dashboard;

pub use location::error::LocationError;
pub use location::geocode::ReverseGeocoder;
pub use location::{FixedPosition, GeolocationProvider, LatLon, FALLBACK_POSITION};

pub use panels::air_quality::{AirQualityPanel, DEFAULT_INTERVAL};
pub use panels::current::CurrentConditionsPanel;
pub use panels::forecast::ForecastPanel;

pub use render::chart::*;
pub use render::error::RenderError;

pub use series::bucket::dedup_by_day;
pub use series::interval::{
    build_intervals, filter_to_interval, Interval, INTERVAL_COUNT, MONTH_SECONDS, WINDOW_SECONDS,
};
pub use series::reshape::{
    reshape_air_quality, reshape_forecast, ForecastSeries, SeriesSet, AQI_SERIES,
};
