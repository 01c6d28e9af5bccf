//! Local-flat geographic approximation: the world X/Z plane is
//! treated as a flat patch anchored at a configured [GeoOrigin],
//! +Z increasing latitude (north), +X increasing longitude (east).
//! Valid only over short distances from the origin, by contract.

use nalgebra::Vector3;

use crate::cfg::GeoOrigin;

/// Effective longitude scale [m/deg] for this tick.
/// When auto update is on, refreshed from the *configured* origin
/// latitude (never the vehicle's live latitude, which would
/// reintroduce the drift the local-flat model avoids).
pub(crate) fn meters_per_degree_longitude(origin: &GeoOrigin) -> f64 {
    if origin.auto_update_longitude_scale {
        origin.meters_per_degree_latitude * origin.latitude_deg.to_radians().cos()
    } else {
        origin.meters_per_degree_longitude
    }
}

/// Maps a world position to (latitude, longitude) decimal degrees.
/// `world_unit_to_meters` scales world units before division by the
/// per-degree constants. The longitude scale is resolved first, so
/// the longitude below never sees a stale value.
pub(crate) fn latitude_longitude_degrees(
    origin: &GeoOrigin,
    position: Vector3<f64>,
    world_unit_to_meters: f64,
) -> (f64, f64) {
    let lon_scale = meters_per_degree_longitude(origin);
    let latitude =
        origin.latitude_deg + position.z * world_unit_to_meters / origin.meters_per_degree_latitude;
    let longitude = origin.longitude_deg + position.x * world_unit_to_meters / lon_scale;
    (latitude, longitude)
}
