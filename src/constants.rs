/// Meters per second to knots conversion factor
pub const MPS_TO_KNOTS: f64 = 1.943844;

/// Meters covered by one degree of latitude, local-flat approximation
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_320.0_f64;

/// Squared-length threshold below which a projected vector is
/// considered degenerate and the derived angle is defined as zero.
pub const DEGENERACY_EPSILON: f64 = 1.0E-9;
