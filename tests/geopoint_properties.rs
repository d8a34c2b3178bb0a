//! Property-based tests for geopoint arithmetic
//!
//! Invariants that hold for every in-range point:
//! - distance to self is zero, distance is symmetric
//! - projecting by D km lands D km away (asin is ill-conditioned near the poles)
//! - bearings stay in [0, 360)
//! - binary records round-trip

use liveview_nav::{Endianness, Geopoint, GeopointFormat};
use proptest::prelude::*;

fn geopoint() -> impl Strategy<Value = Geopoint> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Geopoint::new(lat, lon))
}

fn endianness() -> impl Strategy<Value = Endianness> {
    prop_oneof![Just(Endianness::Big), Just(Endianness::Little)]
}

proptest! {
    #[test]
    fn prop_distance_to_self_is_zero(p in geopoint()) {
        prop_assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn prop_distance_is_symmetric(p in geopoint(), q in geopoint()) {
        let d1 = p.distance_to(&q);
        let d2 = q.distance_to(&p);
        prop_assert!((d1 - d2).abs() <= 1e-9, "{} vs {}", d1, d2);
    }

    #[test]
    fn prop_bearing_in_range(p in geopoint(), q in geopoint()) {
        let bearing = p.bearing_to(&q);
        prop_assert!((0.0..360.0).contains(&bearing), "bearing {}", bearing);
    }

    #[test]
    fn prop_projection_distance(
        lat in -60.0f64..=60.0,
        lon in -180.0f64..=180.0,
        bearing in 0.0f64..360.0,
        distance in 0.0f64..2000.0,
    ) {
        let p = Geopoint::new(lat, lon);
        let travelled = p.project(bearing, distance).distance_to(&p);
        prop_assert!(
            (travelled - distance).abs() <= 1e-6 + distance * 1e-9,
            "projected {} km, measured {} km", distance, travelled
        );
    }

    #[test]
    fn prop_record_round_trip(p in geopoint(), order in endianness()) {
        let decoded = Geopoint::from_record(&p.to_record(order), order).unwrap();
        prop_assert_eq!(decoded, p);
    }

    #[test]
    fn prop_short_record_rejected(len in 0usize..16) {
        let bytes = vec![0u8; len];
        prop_assert!(Geopoint::from_record(&bytes, Endianness::Little).is_err());
    }

    #[test]
    fn prop_is_equal_to_reflexive_and_symmetric(p in geopoint(), q in geopoint(), tol in 0.0f64..20000.0) {
        prop_assert!(p.is_equal_to(Some(&p), 0.0));
        prop_assert_eq!(p.is_equal_to(Some(&q), tol), q.is_equal_to(Some(&p), tol));
    }

    #[test]
    fn prop_decimal_minutes_layout(p in geopoint()) {
        let text = p.format(GeopointFormat::LatLonDecMinute);
        let fields: Vec<&str> = text.split(' ').collect();
        prop_assert_eq!(fields.len(), 6);
        prop_assert!(fields[0] == "N" || fields[0] == "S");
        prop_assert!(fields[3] == "E" || fields[3] == "W");
        prop_assert_eq!(fields[5].len(), 6);
    }
}

#[test]
fn concrete_microdegrees() {
    let p = Geopoint::new(52.6021, 10.0577);
    assert_eq!(p.latitude_e6(), 52602100);
    assert_eq!(p.longitude_e6(), 10057700);
}

#[test]
fn concrete_equator_degree() {
    let origin = Geopoint::new(0.0, 0.0);
    let east = Geopoint::new(0.0, 1.0);
    assert!((origin.distance_to(&east) - 111.19).abs() < 0.01);
    assert!((origin.bearing_to(&east) - 90.0).abs() < 1e-9);
}

#[test]
fn concrete_default_format() {
    let p = Geopoint::new(52.60, 10.05);
    assert_eq!(p.format(GeopointFormat::LatLonDecMinute), "N 52° 36.000 E 010° 03.000");
    assert_eq!(p.to_string(), "N 52° 36.000 E 010° 03.000");
}

#[test]
fn concrete_ten_byte_record() {
    assert!(Geopoint::from_record(&[0u8; 10], Endianness::Big).is_err());
}
