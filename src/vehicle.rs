use nalgebra::{UnitQuaternion, Vector3};

/// Orthonormal right handed basis describing a body's rotation in
/// world space. Body axes: +Z forward, +Y up, +X right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationFrame {
    /// Forward unit vector, world frame
    pub forward: Vector3<f64>,
    /// Up unit vector, world frame
    pub up: Vector3<f64>,
    /// Right unit vector, world frame
    pub right: Vector3<f64>,
}

impl Default for OrientationFrame {
    fn default() -> Self {
        Self::identity()
    }
}

impl OrientationFrame {
    /// Level frame facing north (world +Z), wings along world +X.
    pub fn identity() -> Self {
        Self {
            forward: Vector3::z(),
            up: Vector3::y(),
            right: Vector3::x(),
        }
    }

    /// Builds the [OrientationFrame] of a body rotated by `attitude`
    /// (rotation from body frame to world frame).
    pub fn from_quaternion(attitude: &UnitQuaternion<f64>) -> Self {
        Self {
            forward: attitude * Vector3::z(),
            up: attitude * Vector3::y(),
            right: attitude * Vector3::x(),
        }
    }
}

/// Spatial state of the followed vehicle, sampled once per tick.
/// Owned by the vehicle collaborator, read only to this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialState {
    /// Position, world units
    pub position: Vector3<f64>,
    /// Orientation basis derived from the body's rotation
    pub frame: OrientationFrame,
    /// Linear velocity, world units per second
    pub linear_velocity: Vector3<f64>,
}

impl Default for SpatialState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            frame: OrientationFrame::identity(),
            linear_velocity: Vector3::zeros(),
        }
    }
}

/// Any vehicle (or flight model) should implement the [VehicleStateSource]
/// trait to feed the instrument pipeline. The pipeline only ever reads
/// through this trait and never mutates the vehicle.
pub trait VehicleStateSource {
    /// Provide the current [SpatialState].
    ///
    /// The pipeline samples this once per update tick. Returning None
    /// (vehicle reference lost, model not spawned yet) is valid: the
    /// instruments degrade to default readouts instead of aborting.
    fn spatial_state(&self) -> Option<SpatialState>;

    /// Authoritative airspeed [m/s], when the flight model computes one
    /// (e.g. wind relative). Takes priority over the raw velocity
    /// magnitude. Default: none, velocity magnitude is used.
    fn airspeed_mps(&self) -> Option<f64> {
        None
    }

    /// Current throttle fraction, nominally in [0; 1].
    /// Clamped by the consumer before display.
    fn throttle(&self) -> f64 {
        0.0
    }
}
