// src/geopoint/point.rs
//! The geographic point value type and its geodesic derivations
//!
//! All geometry runs on a spherical earth of radius [`EARTH_RADIUS_KM`].
//! This is an approximation of the WGS-84 ellipsoid: distances can be off by
//! up to roughly half a percent against an ellipsoidal geodesic.

use super::format::{DegreeParts, GeopointFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Mean earth radius used by every distance, bearing and projection.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Microdegrees per degree, the quantum of point equality.
const E6: f64 = 1_000_000.0;

/// An immutable latitude/longitude pair in degrees.
///
/// Values are stored verbatim. Out-of-range or non-finite coordinates are
/// accepted and flow through every formula; NaN in means NaN out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Geopoint {
    latitude: f64,
    longitude: f64,
}

impl Geopoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build a point from single-precision readings as delivered by a
    /// location provider.
    pub fn from_f32(latitude: f32, longitude: f32) -> Self {
        Self::new(f64::from(latitude), f64::from(longitude))
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in microdegrees, rounded half away from zero.
    pub fn latitude_e6(&self) -> i64 {
        (self.latitude * E6).round() as i64
    }

    /// Longitude in microdegrees, rounded half away from zero.
    pub fn longitude_e6(&self) -> i64 {
        (self.longitude * E6).round() as i64
    }

    /// Great-circle distance to `target` in kilometers (haversine).
    pub fn distance_to(&self, target: &Geopoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = target.latitude.to_radians();
        let d_lat = (target.latitude - self.latitude).to_radians();
        let d_lon = (target.longitude - self.longitude).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Initial great-circle bearing towards `target`, in degrees within [0, 360).
    pub fn bearing_to(&self, target: &Geopoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = target.latitude.to_radians();
        let d_lon = (target.longitude - self.longitude).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        let raw = y.atan2(x).to_degrees();

        let bearing = if raw < 0.0 { raw + 360.0 } else { raw };
        // -1e-15 + 360.0 rounds to exactly 360.0; -0.0 passes the shift untouched
        if bearing >= 360.0 || bearing == 0.0 {
            0.0
        } else {
            bearing
        }
    }

    /// The point reached by travelling `distance_km` along the initial
    /// bearing `bearing_deg`. The resulting longitude is not wrapped into
    /// [-180, 180].
    pub fn project(&self, bearing_deg: f64, distance_km: f64) -> Geopoint {
        let rlat1 = self.latitude.to_radians();
        let rlon1 = self.longitude.to_radians();
        let rbearing = bearing_deg.to_radians();
        let rdist = distance_km / EARTH_RADIUS_KM;

        let rlat2 = (rlat1.sin() * rdist.cos() + rlat1.cos() * rdist.sin() * rbearing.cos()).asin();
        let rlon2 = rlon1
            + (rbearing.sin() * rdist.sin() * rlat1.cos())
                .atan2(rdist.cos() - rlat1.sin() * rlat2.sin());

        Geopoint::new(rlat2.to_degrees(), rlon2.to_degrees())
    }

    /// Whether `other` is present and lies within `tolerance_km` of this point.
    pub fn is_equal_to(&self, other: Option<&Geopoint>, tolerance_km: f64) -> bool {
        other.map_or(false, |gp| self.distance_to(gp) <= tolerance_km)
    }

    /// 'N' for non-negative latitude, 'S' otherwise.
    pub fn lat_dir(&self) -> char {
        if self.latitude >= 0.0 {
            'N'
        } else {
            'S'
        }
    }

    /// 'E' for non-negative longitude, 'W' otherwise.
    pub fn lon_dir(&self) -> char {
        if self.longitude >= 0.0 {
            'E'
        } else {
            'W'
        }
    }

    pub fn lat_parts(&self) -> DegreeParts {
        DegreeParts::new(self.lat_dir(), self.latitude)
    }

    pub fn lon_parts(&self) -> DegreeParts {
        DegreeParts::new(self.lon_dir(), self.longitude)
    }

    pub fn format(&self, format: GeopointFormat) -> String {
        format.apply(self)
    }
}

impl From<(f32, f32)> for Geopoint {
    fn from((latitude, longitude): (f32, f32)) -> Self {
        Self::from_f32(latitude, longitude)
    }
}

impl From<(f64, f64)> for Geopoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl PartialEq for Geopoint {
    fn eq(&self, other: &Self) -> bool {
        self.latitude_e6() == other.latitude_e6() && self.longitude_e6() == other.longitude_e6()
    }
}

impl Eq for Geopoint {}

impl Hash for Geopoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude_e6().hash(state);
        self.longitude_e6().hash(state);
    }
}

impl fmt::Display for Geopoint {
    /// Degrees and decimal minutes, e.g. `N 52° 36.123 E 010° 03.456`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(GeopointFormat::LatLonDecMinute))
    }
}
