//! Aviation convention angles, derived independently from the
//! orientation basis. Pitch and roll deliberately do not share an
//! Euler decomposition: each is measured against its own reference
//! plane, which keeps the readouts stable as pitch approaches +/-90
//! where a single rotation-to-Euler conversion couples the axes.

use nalgebra::Vector3;

use crate::{
    constants::DEGENERACY_EPSILON,
    utils::{signed_angle, wrap_degrees},
    vehicle::OrientationFrame,
};

/// Yaw angle (decimal degrees) of the basis about world up,
/// compass range [0; 360). World +Z is north, +X is east.
pub fn heading_degrees(frame: &OrientationFrame) -> f64 {
    wrap_degrees(frame.forward.x.atan2(frame.forward.z).to_degrees())
}

/// Signed pitch (decimal degrees), nose up positive.
/// Angle between the forward vector and its projection onto the
/// horizontal plane, signed by the vertical component so a nose below
/// the horizon always reads negative, roll and heading regardless.
/// Defined as zero when forward is near vertical.
pub fn pitch_degrees(frame: &OrientationFrame) -> f64 {
    let horizontal = Vector3::new(frame.forward.x, 0.0, frame.forward.z);
    if horizontal.norm_squared() < DEGENERACY_EPSILON {
        return 0.0;
    }
    frame.forward.y.atan2(horizontal.norm()).to_degrees()
}

/// Signed roll (decimal degrees), right wing down positive.
/// Angle carrying the up vector onto world up projected into the plane
/// normal to forward (the horizon-referenced up), measured about the
/// forward axis. Defined as zero when forward is near world-vertical,
/// where the reference projection collapses.
pub fn roll_degrees(frame: &OrientationFrame) -> f64 {
    let forward_sq = frame.forward.norm_squared();
    if forward_sq < DEGENERACY_EPSILON {
        return 0.0;
    }
    // scale aware projection, the basis is not trusted to be normalized
    let flat_up =
        Vector3::y() - frame.forward * (Vector3::y().dot(&frame.forward) / forward_sq);
    if flat_up.norm_squared() < DEGENERACY_EPSILON {
        return 0.0;
    }
    signed_angle(frame.up, flat_up, frame.forward).to_degrees()
}
