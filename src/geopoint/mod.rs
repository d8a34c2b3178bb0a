// src/geopoint/mod.rs
//! Geographic point arithmetic and coordinate formatting

pub mod format;
pub mod point;
pub mod record;

pub use format::{DegreeParts, GeopointFormat};
pub use point::{Geopoint, EARTH_RADIUS_KM};
pub use record::{Endianness, RECORD_LEN};
