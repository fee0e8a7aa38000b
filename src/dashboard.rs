//! The composition root: one [`Dashboard`] wires the weather client, the
//! reverse geocoder and the three panels together, and aggregates their
//! load-complete signals into a single readiness flag for the loader.

use crate::api::client::WeatherApi;
use crate::config::Config;
use crate::error::SkycastError;
use crate::location::geocode::ReverseGeocoder;
use crate::location::{GeolocationProvider, LatLon, FALLBACK_POSITION};
use crate::panels::air_quality::AirQualityPanel;
use crate::panels::current::CurrentConditionsPanel;
use crate::panels::forecast::ForecastPanel;
use bon::bon;
use futures_util::join;
use log::warn;
use std::sync::Arc;
use tokio::sync::watch;

/// The client-side weather dashboard.
///
/// Each panel owns its fetched data and derived view; the dashboard only
/// routes location changes to them and reads back their readiness. Fetch
/// failures are logged and leave the affected panel unpopulated; nothing
/// retries and nothing is fatal.
///
/// # Examples
///
/// ```no_run
/// # use skycast::{Config, Dashboard, SkycastError};
/// # async fn run() -> Result<(), SkycastError> {
/// let dashboard = Dashboard::builder()
///     .config(Config::from_env()?)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    geocoder: ReverseGeocoder,
    position: LatLon,
    place_name: Option<String>,
    location_error: Option<String>,
    air_quality: AirQualityPanel,
    forecast: ForecastPanel,
    current: CurrentConditionsPanel,
    air_ready: watch::Receiver<bool>,
    forecast_ready: watch::Receiver<bool>,
}

#[bon]
impl Dashboard {
    /// Creates a dashboard from a [`Config`].
    ///
    /// # Arguments
    ///
    /// * `.config(Config)`: **Required.** Provider endpoints and API key.
    /// * `.position(LatLon)`: Optional. Starting position before geolocation
    ///   resolves. Defaults to [`FALLBACK_POSITION`].
    ///
    /// # Errors
    ///
    /// Returns [`SkycastError`] when the HTTP clients cannot be constructed.
    #[builder]
    pub fn new(config: Config, position: Option<LatLon>) -> Result<Self, SkycastError> {
        let api = Arc::new(
            WeatherApi::builder()
                .base_url(config.api_url)
                .api_key(config.api_key)
                .build()?,
        );
        let geocoder = ReverseGeocoder::new(config.geocode_url)?;

        let (air_tx, air_ready) = watch::channel(false);
        let (forecast_tx, forecast_ready) = watch::channel(false);

        Ok(Self {
            geocoder,
            position: position.unwrap_or(FALLBACK_POSITION),
            place_name: None,
            location_error: None,
            air_quality: AirQualityPanel::new(Arc::clone(&api), air_tx),
            forecast: ForecastPanel::new(Arc::clone(&api), forecast_tx),
            current: CurrentConditionsPanel::new(api, config.lang),
            air_ready,
            forecast_ready,
        })
    }

    /// Asks `provider` for the user's position and refreshes everything.
    ///
    /// A provider failure is recorded in [`Dashboard::location_error`] and
    /// the dashboard keeps its current position; the panels are refreshed
    /// either way, exactly like the original page which always renders for
    /// its fallback coordinates.
    pub async fn locate(&mut self, provider: &dyn GeolocationProvider) {
        match provider.current_position() {
            Ok(position) => {
                self.location_error = None;
                self.set_location(position).await;
            }
            Err(error) => {
                warn!("geolocation failed: {error}");
                self.location_error = Some(error.to_string());
                self.set_location(self.position).await;
            }
        }
    }

    /// Moves the dashboard to `position` and refreshes all panels plus the
    /// place name, concurrently.
    ///
    /// Individual fetch failures are logged with `warn!` and swallowed: the
    /// affected panel simply stays unpopulated and, for the chart panels,
    /// never signals readiness.
    pub async fn set_location(&mut self, position: LatLon) {
        self.position = position;

        let Self {
            geocoder,
            air_quality,
            forecast,
            current,
            ..
        } = self;

        let (air, fore, cur, name) = join!(
            air_quality.refresh(position),
            forecast.refresh(position),
            current.refresh(position),
            geocoder.display_name(position),
        );

        if let Err(error) = air {
            warn!("air-quality fetch failed: {error}");
        }
        if let Err(error) = fore {
            warn!("forecast fetch failed: {error}");
        }
        if let Err(error) = cur {
            warn!("current-weather fetch failed: {error}");
        }
        match name {
            Ok(display_name) => self.place_name = Some(display_name),
            Err(error) => warn!("reverse geocoding failed: {error}"),
        }
    }

    /// True once both chart panels have signalled load-complete.
    ///
    /// The current-conditions table does not gate readiness; it renders
    /// nothing until its own data arrives.
    pub fn is_ready(&self) -> bool {
        *self.air_ready.borrow() && *self.forecast_ready.borrow()
    }

    /// The position the panels were last refreshed for.
    pub fn position(&self) -> LatLon {
        self.position
    }

    /// "City, Country" for the current position, once geocoded.
    pub fn place_name(&self) -> Option<&str> {
        self.place_name.as_deref()
    }

    /// The last geolocation failure, if any. Informational only.
    pub fn location_error(&self) -> Option<&str> {
        self.location_error.as_deref()
    }

    pub fn air_quality(&self) -> &AirQualityPanel {
        &self.air_quality
    }

    pub fn air_quality_mut(&mut self) -> &mut AirQualityPanel {
        &mut self.air_quality
    }

    pub fn forecast(&self) -> &ForecastPanel {
        &self.forecast
    }

    pub fn current_conditions(&self) -> &CurrentConditionsPanel {
        &self.current
    }
}
