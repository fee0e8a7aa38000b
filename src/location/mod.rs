//! Geographic position types and the geolocation seam.

pub mod error;
pub mod geocode;

use crate::location::error::LocationError;

/// A geographical coordinate: latitude first, longitude second.
///
/// # Examples
///
/// ```
/// use skycast::LatLon;
///
/// let bogota = LatLon(4.6953937, -74.1240992);
/// assert_eq!(bogota.0, 4.6953937); // latitude
/// assert_eq!(bogota.1, -74.1240992); // longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Position the dashboard starts from before geolocation resolves.
pub const FALLBACK_POSITION: LatLon = LatLon(4.6953937, -74.1240992);

/// External capability that reports the user's current position.
///
/// The dashboard only ever asks once per session; implementations backed by
/// a platform location service may block while the platform resolves a fix.
pub trait GeolocationProvider {
    /// The current position, or why it could not be determined.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::Unavailable`] with a provider-specific
    /// message when no position can be produced.
    fn current_position(&self) -> Result<LatLon, LocationError>;
}

/// A provider that always reports the same position.
///
/// Useful as a stand-in when no platform location service is wired up, and
/// in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub LatLon);

impl GeolocationProvider for FixedPosition {
    fn current_position(&self) -> Result<LatLon, LocationError> {
        Ok(self.0)
    }
}
