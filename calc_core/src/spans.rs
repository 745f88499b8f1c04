//! # Span Geometry
//!
//! Great-circle distance between pole coordinates, used to derive the
//! `span_length` input of the mechanical-stress calculation from surveyed
//! or mapped pole positions.
//!
//! Coordinates are WGS84 decimal degrees. Reprojection from UTM/SIRGAS
//! grids happens upstream.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::spans::{span_length_between, LatLon};
//!
//! let a = LatLon::new(-22.9068, -43.1729);
//! let b = LatLon::new(-22.9073, -43.1729);
//! let span = span_length_between(a, b).unwrap();
//! assert!((span.0 - 55.6).abs() < 0.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Meters;

/// Mean Earth radius (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Bounding box of Brazil: (lat_min, lat_max, lon_min, lon_max)
const BRAZIL_BOUNDS: (f64, f64, f64, f64) = (-33.75, 5.27, -73.99, -28.85);

/// A WGS84 coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Reject coordinates outside [-90, 90] x [-180, 180] or not finite
    pub fn validate(&self) -> CalcResult<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(CalcError::invalid_input(
                "lat",
                self.lat.to_string(),
                "Latitude must be between -90 and 90 degrees",
            ));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(CalcError::invalid_input(
                "lon",
                self.lon.to_string(),
                "Longitude must be between -180 and 180 degrees",
            ));
        }
        Ok(())
    }

    pub fn is_within_brazil(&self) -> bool {
        is_within_brazil(self.lat, self.lon)
    }
}

/// Haversine distance between two points (m)
pub fn haversine_distance_m(a: LatLon, b: LatLon) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let x = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * x.sqrt().atan2((1.0 - x).sqrt())
}

/// Check whether a coordinate lies inside Brazil's bounding box
pub fn is_within_brazil(lat: f64, lon: f64) -> bool {
    let (lat_min, lat_max, lon_min, lon_max) = BRAZIL_BOUNDS;
    (lat_min..=lat_max).contains(&lat) && (lon_min..=lon_max).contains(&lon)
}

/// Span length between two poles, ready for a mechanical-stress request.
///
/// Fails if either coordinate is invalid or the poles coincide (zero span).
pub fn span_length_between(a: LatLon, b: LatLon) -> CalcResult<Meters> {
    a.validate()?;
    b.validate()?;
    let distance = haversine_distance_m(a, b);
    if distance <= 0.0 {
        return Err(CalcError::invalid_input(
            "span_length",
            distance.to_string(),
            "Poles share the same position",
        ));
    }
    Ok(Meters(distance))
}
