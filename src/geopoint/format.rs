// src/geopoint/format.rs
//! Coordinate text formats and the sexagesimal decomposition behind them

use super::point::Geopoint;
use crate::error::NavError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One axis of a coordinate split into display parts.
///
/// All parts are taken from the magnitude; the sign lives in `direction`.
/// Integer parts truncate, scaled fractions round half away from zero. The
/// fractions are rounded independently of the integer parts, so a value such
/// as 52.9999999 yields 52 degrees with a zero degree fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeParts {
    pub direction: char,
    pub negative: bool,
    pub degrees: u32,
    /// Fractional degrees scaled by 10^5.
    pub degree_frac: u32,
    pub minutes: u32,
    /// Fractional minutes scaled by 10^3.
    pub minute_frac: u32,
    /// Continuous minutes in [0, 60).
    pub minute_raw: f64,
    pub seconds: u32,
    /// Fractional seconds scaled by 10^3.
    pub second_frac: u32,
    /// Continuous seconds in [0, 60).
    pub second_raw: f64,
}

impl DegreeParts {
    pub fn new(direction: char, value: f64) -> Self {
        let abs = value.abs();
        Self {
            direction,
            negative: value < 0.0,
            degrees: abs as u32,
            degree_frac: scaled_frac(abs * 100_000.0, 100_000),
            minutes: truncated_mod(abs * 60.0, 60),
            minute_frac: scaled_frac(abs * 60_000.0, 1000),
            minute_raw: (abs * 60.0) % 60.0,
            seconds: truncated_mod(abs * 3600.0, 60),
            second_frac: scaled_frac(abs * 3_600_000.0, 1000),
            second_raw: (abs * 3600.0) % 60.0,
        }
    }
}

fn truncated_mod(scaled: f64, modulus: u64) -> u32 {
    ((scaled as u64) % modulus) as u32
}

fn scaled_frac(scaled: f64, modulus: u64) -> u32 {
    ((scaled.round() as u64) % modulus) as u32
}

/// Text layouts a display can request for a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeopointFormat {
    /// `52.60210, 010.05770`
    Decimal,
    /// `N 52° 36.126 E 010° 03.462`
    #[default]
    LatLonDecMinute,
    /// Like `LatLonDecMinute` but with the unrounded minute value.
    LatLonDecMinuteRaw,
    /// `N 52° 36' 07.560" E 010° 03' 27.720"`
    LatLonDecSecond,
}

impl GeopointFormat {
    pub const ALL: [GeopointFormat; 4] = [
        GeopointFormat::Decimal,
        GeopointFormat::LatLonDecMinute,
        GeopointFormat::LatLonDecMinuteRaw,
        GeopointFormat::LatLonDecSecond,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GeopointFormat::Decimal => "DECIMAL",
            GeopointFormat::LatLonDecMinute => "LAT_LON_DECMINUTE",
            GeopointFormat::LatLonDecMinuteRaw => "LAT_LON_DECMINUTE_RAW",
            GeopointFormat::LatLonDecSecond => "LAT_LON_DECSECOND",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GeopointFormat::Decimal => "Decimal degrees",
            GeopointFormat::LatLonDecMinute => "Degrees, decimal minutes",
            GeopointFormat::LatLonDecMinuteRaw => "Degrees, raw minutes",
            GeopointFormat::LatLonDecSecond => "Degrees, minutes, seconds",
        }
    }

    /// Render `gp` in this format.
    pub fn apply(&self, gp: &Geopoint) -> String {
        let lat = gp.lat_parts();
        let lon = gp.lon_parts();

        match self {
            GeopointFormat::Decimal => format!(
                "{}{:08.5}, {}{:09.5}",
                sign(&lat),
                gp.latitude().abs(),
                sign(&lon),
                gp.longitude().abs()
            ),
            GeopointFormat::LatLonDecMinute => format!(
                "{} {:02}° {:02}.{:03} {} {:03}° {:02}.{:03}",
                lat.direction,
                lat.degrees,
                lat.minutes,
                lat.minute_frac,
                lon.direction,
                lon.degrees,
                lon.minutes,
                lon.minute_frac
            ),
            GeopointFormat::LatLonDecMinuteRaw => format!(
                "{} {:02}° {:06.3} {} {:03}° {:06.3}",
                lat.direction, lat.degrees, lat.minute_raw, lon.direction, lon.degrees, lon.minute_raw
            ),
            GeopointFormat::LatLonDecSecond => format!(
                "{} {:02}° {:02}' {:02}.{:03}\" {} {:03}° {:02}' {:02}.{:03}\"",
                lat.direction,
                lat.degrees,
                lat.minutes,
                lat.seconds,
                lat.second_frac,
                lon.direction,
                lon.degrees,
                lon.minutes,
                lon.seconds,
                lon.second_frac
            ),
        }
    }
}

fn sign(parts: &DegreeParts) -> &'static str {
    if parts.negative {
        "-"
    } else {
        ""
    }
}

impl fmt::Display for GeopointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeopointFormat {
    type Err = NavError;

    /// Accepts the canonical names case-insensitively, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        GeopointFormat::ALL
            .into_iter()
            .find(|format| format.name() == normalized)
            .ok_or_else(|| NavError::Parse(format!("unknown coordinate format '{}'", s)))
    }
}
