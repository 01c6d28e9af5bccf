use crate::cfg::GeoOrigin;
use crate::constants::METERS_PER_DEGREE_LATITUDE;
use crate::geo::{latitude_longitude_degrees, meters_per_degree_longitude};
use crate::prelude::Vector3;

#[test]
fn origin_round_trip() {
    // aircraft parked at the world origin reads the configured origin
    let origin = GeoOrigin::new(47.39785, 8.54562);
    let (lat, lon) = latitude_longitude_degrees(&origin, Vector3::zeros(), 1.0);
    assert_eq!(lat, origin.latitude_deg);
    assert_eq!(lon, origin.longitude_deg);
}

#[test]
fn north_displacement_increases_latitude() {
    let origin = GeoOrigin::new(47.0, 8.5);
    let position = Vector3::new(0.0, 1200.0, METERS_PER_DEGREE_LATITUDE);
    let (lat, lon) = latitude_longitude_degrees(&origin, position, 1.0);
    assert!((lat - 48.0).abs() < 1.0E-12);
    assert_eq!(lon, 8.5);
}

#[test]
fn east_displacement_increases_longitude() {
    let origin = GeoOrigin::new(47.0, 8.5);
    let lon_scale = meters_per_degree_longitude(&origin);
    let position = Vector3::new(lon_scale, 0.0, 0.0);
    let (lat, lon) = latitude_longitude_degrees(&origin, position, 1.0);
    assert_eq!(lat, 47.0);
    assert!((lon - 9.5).abs() < 1.0E-12);
}

#[test]
fn world_unit_scale_applies_before_division() {
    let origin = GeoOrigin::new(0.0, 0.0);
    // 1 world unit = 2 meters
    let position = Vector3::new(0.0, 0.0, METERS_PER_DEGREE_LATITUDE / 2.0);
    let (lat, _) = latitude_longitude_degrees(&origin, position, 2.0);
    assert!((lat - 1.0).abs() < 1.0E-12);
}

#[test]
fn auto_update_uses_configured_origin_latitude() {
    let origin = GeoOrigin::new(60.0, 0.0);
    let expected = METERS_PER_DEGREE_LATITUDE * 60.0_f64.to_radians().cos();
    assert!((meters_per_degree_longitude(&origin) - expected).abs() < 1.0E-9);

    // displacing the vehicle must not change the scale: it always
    // derives from the configured origin, never the live latitude
    let far_north = Vector3::new(0.0, 0.0, 5.0 * METERS_PER_DEGREE_LATITUDE);
    let (lat, _) = latitude_longitude_degrees(&origin, far_north, 1.0);
    assert!((lat - 65.0).abs() < 1.0E-12);
    assert!((meters_per_degree_longitude(&origin) - expected).abs() < 1.0E-9);
}

#[test]
fn fixed_longitude_scale_when_auto_update_off() {
    let origin = GeoOrigin {
        latitude_deg: 60.0,
        longitude_deg: 0.0,
        meters_per_degree_longitude: 50_000.0,
        auto_update_longitude_scale: false,
        ..Default::default()
    };
    assert_eq!(meters_per_degree_longitude(&origin), 50_000.0);

    let position = Vector3::new(50_000.0, 0.0, 0.0);
    let (_, lon) = latitude_longitude_degrees(&origin, position, 1.0);
    assert!((lon - 1.0).abs() < 1.0E-12);
}
