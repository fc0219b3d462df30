use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::LocationError;

/// Observer location on Earth's surface, with the civil timezone results are
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude: f64,
    /// Elevation above mean sea level in meters.
    pub elevation: f64,
    pub timezone: Tz,
}

impl GeoLocation {
    /// Create a location, rejecting non-finite or out-of-range coordinates.
    pub fn new(
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timezone: Tz,
    ) -> Result<Self, LocationError> {
        check_range("latitude", latitude, 90.0)?;
        check_range("longitude", longitude, 180.0)?;
        if !elevation.is_finite() {
            return Err(LocationError::InvalidCoordinate {
                name: "elevation",
                value: elevation,
            });
        }
        Ok(Self {
            latitude,
            longitude,
            elevation,
            timezone,
        })
    }

    /// Like [`GeoLocation::new`], resolving an IANA timezone name such as
    /// `America/New_York`.
    pub fn with_timezone_name(
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timezone: &str,
    ) -> Result<Self, LocationError> {
        let tz = parse_timezone(timezone)?;
        Self::new(latitude, longitude, elevation, tz)
    }

    /// Elevation used for horizon dip; below-sea-level sites count as zero.
    pub fn dip_elevation(&self) -> f64 {
        self.elevation.max(0.0)
    }
}

/// Resolve an IANA timezone identifier.
pub fn parse_timezone(name: &str) -> Result<Tz, LocationError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| LocationError::InvalidTimezone(name.to_string()))
}

fn check_range(name: &'static str, value: f64, limit: f64) -> Result<(), LocationError> {
    if value.is_finite() && value.abs() <= limit {
        Ok(())
    } else {
        Err(LocationError::InvalidCoordinate { name, value })
    }
}
