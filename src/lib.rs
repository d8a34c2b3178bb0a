// src/lib.rs
//! LiveView Navigator Library
//!
//! Geographic point arithmetic for a wearable navigator: distances, bearings,
//! projections and the coordinate text formats shown on the device.

pub mod config;
pub mod error;
pub mod geopoint;
pub mod logging;
pub mod receiver;

// Re-export main types for convenience
pub use config::NavConfig;
pub use error::{DecodeError, NavError, Result};
pub use geopoint::{Endianness, Geopoint, GeopointFormat};
pub use receiver::{CoordinateUpdate, Navigation, UpdateReceiver};
