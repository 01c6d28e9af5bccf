use nalgebra::Vector3;

/// Linear interpolation between a and b
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation: position of x in [a; b], unclamped
pub fn inverse_lerp(a: f64, b: f64, x: f64) -> f64 {
    (x - a) / (b - a)
}

/// Signed angle (radians) carrying a onto b, measured about `axis`
/// by the right hand rule. Only the direction of `axis` matters:
/// none of the inputs are required to be normalized.
pub fn signed_angle(a: Vector3<f64>, b: Vector3<f64>, axis: Vector3<f64>) -> f64 {
    let cross = a.cross(&b);
    let angle = cross.norm().atan2(a.dot(&b));
    if axis.dot(&cross) < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Normalizes any angle (degrees) to compass range [0; 360)
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped == 360.0 {
        0.0
    } else {
        wrapped
    }
}
