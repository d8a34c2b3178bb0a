// src/receiver.rs
//! Destination updates delivered by the phone-side location provider

use crate::config::NavConfig;
use crate::error::Result;
use crate::geopoint::{Geopoint, GeopointFormat};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, trace};

/// A single coordinate reading as delivered by the provider, in single
/// precision.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoordinateUpdate {
    pub latitude: f32,
    pub longitude: f32,
    #[serde(default = "Utc::now")]
    pub received_at: DateTime<Utc>,
}

impl CoordinateUpdate {
    pub fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
            received_at: Utc::now(),
        }
    }

    /// Parse the provider's extras object, e.g.
    /// `{"latitude": 52.6021, "longitude": 10.0577}`.
    pub fn from_json(extras: &str) -> Result<Self> {
        Ok(serde_json::from_str(extras)?)
    }

    pub fn to_geopoint(&self) -> Geopoint {
        Geopoint::from_f32(self.latitude, self.longitude)
    }
}

/// Distance, bearing and label from the current position to the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub distance_km: f64,
    pub bearing_deg: f64,
    pub destination: String,
}

/// Keeps the most recent destination in memory.
#[derive(Debug, Clone)]
pub struct UpdateReceiver {
    destination: Option<Geopoint>,
    updated_at: Option<DateTime<Utc>>,
    tolerance_km: f64,
    format: GeopointFormat,
}

impl UpdateReceiver {
    pub fn new(tolerance_km: f64, format: GeopointFormat) -> Self {
        Self {
            destination: None,
            updated_at: None,
            tolerance_km,
            format,
        }
    }

    pub fn from_config(config: &NavConfig) -> Self {
        Self::new(config.tolerance_km, config.default_format)
    }

    /// Store `update` as the new destination.
    ///
    /// Returns `true` when the destination moved further than the configured
    /// tolerance, or when there was no destination before.
    pub fn on_receive(&mut self, update: CoordinateUpdate) -> bool {
        let point = update.to_geopoint();
        debug!(
            "received new coords {}",
            point.format(GeopointFormat::LatLonDecMinuteRaw)
        );

        let moved = !point.is_equal_to(self.destination.as_ref(), self.tolerance_km);
        if !moved {
            trace!("destination unchanged within {} km", self.tolerance_km);
        }

        self.destination = Some(point);
        self.updated_at = Some(update.received_at);
        moved
    }

    pub fn destination(&self) -> Option<Geopoint> {
        self.destination
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn clear(&mut self) {
        self.destination = None;
        self.updated_at = None;
    }

    /// Navigation data from `current` to the cached destination.
    pub fn navigate_from(&self, current: &Geopoint) -> Option<Navigation> {
        self.destination.map(|dest| Navigation {
            distance_km: current.distance_to(&dest),
            bearing_deg: current.bearing_to(&dest),
            destination: dest.format(self.format),
        })
    }
}

impl Default for UpdateReceiver {
    fn default() -> Self {
        Self::from_config(&NavConfig::default())
    }
}
