use nalgebra::Vector3;

/// Derived instrument quantities, recomputed from the vehicle's
/// spatial state on every [snapshot](crate::provider::InstrumentDataProvider::snapshot)
/// call. Plain value type: never mutated after creation, carries no
/// identity from one tick to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentSnapshot {
    /// Airspeed [m/s]: vehicle reported when available,
    /// otherwise raw velocity magnitude
    pub speed_mps: f64,
    /// Airspeed [knots], exact conversion from `speed_mps`
    pub speed_knots: f64,
    /// Altitude [m]: vertical world coordinate scaled to meters
    pub altitude_m: f64,
    /// Compass heading, decimal degrees in [0; 360)
    pub heading_deg: f64,
    /// Signed pitch, decimal degrees, nose up positive
    pub pitch_deg: f64,
    /// Signed roll, decimal degrees, right wing down positive
    pub roll_deg: f64,
    /// Vertical component of the linear velocity [world units/s]
    pub vertical_speed: f64,
    /// Approximate latitude, decimal degrees.
    /// Zero when geographic mapping is disabled.
    pub latitude_deg: f64,
    /// Approximate longitude, decimal degrees.
    /// Zero when geographic mapping is disabled.
    pub longitude_deg: f64,
    /// Raw world position passthrough
    pub world_position: Vector3<f64>,
    /// Vehicle throttle fraction, clamped to [0; 1]
    pub throttle: f64,
}

impl Default for InstrumentSnapshot {
    fn default() -> Self {
        Self {
            speed_mps: 0.0,
            speed_knots: 0.0,
            altitude_m: 0.0,
            heading_deg: 0.0,
            pitch_deg: 0.0,
            roll_deg: 0.0,
            vertical_speed: 0.0,
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            world_position: Vector3::zeros(),
            throttle: 0.0,
        }
    }
}
