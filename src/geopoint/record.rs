// src/geopoint/record.rs
//! Fixed 16-byte binary record: f64 latitude followed by f64 longitude

use super::point::Geopoint;
use crate::error::{DecodeError, NavError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const RECORD_LEN: usize = 16;

/// Byte order of the two doubles in a record. Must match the persistence
/// layer that produced the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    Big,
    #[default]
    Little,
}

impl Endianness {
    fn read_f64(self, bytes: [u8; 8]) -> f64 {
        match self {
            Endianness::Big => f64::from_be_bytes(bytes),
            Endianness::Little => f64::from_le_bytes(bytes),
        }
    }

    fn write_f64(self, value: f64) -> [u8; 8] {
        match self {
            Endianness::Big => value.to_be_bytes(),
            Endianness::Little => value.to_le_bytes(),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Big => f.write_str("big"),
            Endianness::Little => f.write_str("little"),
        }
    }
}

impl FromStr for Endianness {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" | "be" => Ok(Endianness::Big),
            "little" | "le" => Ok(Endianness::Little),
            _ => Err(NavError::Parse(format!("unknown endianness '{}'", s))),
        }
    }
}

impl Geopoint {
    /// Decode a point from the first [`RECORD_LEN`] bytes of `bytes`.
    /// Trailing bytes are ignored.
    pub fn from_record(bytes: &[u8], endianness: Endianness) -> Result<Geopoint, DecodeError> {
        let record: &[u8; RECORD_LEN] = bytes
            .get(..RECORD_LEN)
            .and_then(|head| head.try_into().ok())
            .ok_or(DecodeError {
                expected: RECORD_LEN,
                actual: bytes.len(),
            })?;

        let mut lat = [0u8; 8];
        let mut lon = [0u8; 8];
        lat.copy_from_slice(&record[..8]);
        lon.copy_from_slice(&record[8..]);

        Ok(Geopoint::new(endianness.read_f64(lat), endianness.read_f64(lon)))
    }

    pub fn to_record(&self, endianness: Endianness) -> [u8; RECORD_LEN] {
        let mut record = [0u8; RECORD_LEN];
        record[..8].copy_from_slice(&endianness.write_f64(self.latitude()));
        record[8..].copy_from_slice(&endianness.write_f64(self.longitude()));
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_record() {
        let err = Geopoint::from_record(&[0u8; 10], Endianness::Big).unwrap_err();
        assert_eq!(err, DecodeError { expected: 16, actual: 10 });

        assert!(Geopoint::from_record(&[], Endianness::Little).is_err());
    }

    #[test]
    fn test_big_endian_layout() {
        let gp = Geopoint::new(1.0, -2.0);
        let record = gp.to_record(Endianness::Big);
        assert_eq!(&record[..8], &[0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&record[8..], &[0xc0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_little_endian_layout() {
        let record = Geopoint::new(1.0, -2.0).to_record(Endianness::Little);
        assert_eq!(&record[..8], &[0, 0, 0, 0, 0, 0, 0xf0, 0x3f]);
        assert_eq!(&record[8..], &[0, 0, 0, 0, 0, 0, 0, 0xc0]);
    }

    #[test]
    fn test_round_trip_preserves_bits() {
        let gp = Geopoint::new(52.6021, 10.0577);
        for endianness in [Endianness::Big, Endianness::Little] {
            let decoded = Geopoint::from_record(&gp.to_record(endianness), endianness).unwrap();
            assert_eq!(decoded, gp);
            assert_eq!(decoded.latitude().to_bits(), gp.latitude().to_bits());
            assert_eq!(decoded.longitude().to_bits(), gp.longitude().to_bits());
        }
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = Geopoint::new(-33.5, 151.25).to_record(Endianness::Big).to_vec();
        bytes.extend_from_slice(&[0xff; 4]);
        let decoded = Geopoint::from_record(&bytes, Endianness::Big).unwrap();
        assert_eq!(decoded.latitude(), -33.5);
        assert_eq!(decoded.longitude(), 151.25);
    }

    #[test]
    fn test_mismatched_endianness_decodes_garbage() {
        let record = Geopoint::new(52.5, 10.25).to_record(Endianness::Big);
        let decoded = Geopoint::from_record(&record, Endianness::Little).unwrap();
        assert_ne!(decoded.latitude(), 52.5);
    }

    #[test]
    fn test_parse_endianness() {
        assert_eq!("BIG".parse::<Endianness>().unwrap(), Endianness::Big);
        assert_eq!("le".parse::<Endianness>().unwrap(), Endianness::Little);
        assert!("middle".parse::<Endianness>().is_err());
    }
}
