use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::constants::METERS_PER_DEGREE_LATITUDE;

/// Configuration Error
#[derive(Debug, Error)]
pub enum Error {
    #[error("world unit scale must be strictly positive, got {0}")]
    InvalidWorldUnitScale(f64),
    #[error("smoothing factor must lie in [0; 1], got {0}")]
    InvalidSmoothFactor(f64),
    #[error("vsi range must be strictly positive, got {0}")]
    InvalidVsiRange(f64),
    #[error("fuel fraction must lie in [0; 1], got {0}")]
    InvalidFuelFraction(f64),
    #[error("meters per degree of latitude must be strictly positive, got {0}")]
    InvalidLatitudeScale(f64),
    #[error("meters per degree of longitude must be strictly positive, got {0}")]
    InvalidLongitudeScale(f64),
}

fn default_world_unit_to_meters() -> f64 {
    1.0
}

fn default_smooth_factor() -> f64 {
    0.85
}

fn default_pitch_pixels_per_degree() -> f64 {
    4.0
}

fn default_vsi_range() -> f64 {
    20.0
}

fn default_fuel_fraction() -> f64 {
    1.0
}

fn default_meters_per_degree_latitude() -> f64 {
    METERS_PER_DEGREE_LATITUDE
}

fn default_meters_per_degree_longitude() -> f64 {
    METERS_PER_DEGREE_LATITUDE
}

fn default_auto_update() -> bool {
    true
}

/// Reference point mapped to the world origin, for the
/// local-flat geographic approximation. Only valid over short
/// distances from the configured origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct GeoOrigin {
    /// Latitude (decimal degrees) of the world origin
    pub latitude_deg: f64,
    /// Longitude (decimal degrees) of the world origin
    pub longitude_deg: f64,
    /// Meters covered by one degree of latitude
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_meters_per_degree_latitude")
    )]
    pub meters_per_degree_latitude: f64,
    /// Meters covered by one degree of longitude. Only used
    /// when `auto_update_longitude_scale` is turned off.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_meters_per_degree_longitude")
    )]
    pub meters_per_degree_longitude: f64,
    /// When turned on, the longitude scale is refreshed every tick
    /// as `meters_per_degree_latitude * cos(latitude_deg)`, from the
    /// configured origin latitude (never the live latitude).
    #[cfg_attr(feature = "serde", serde(default = "default_auto_update"))]
    pub auto_update_longitude_scale: bool,
}

impl Default for GeoOrigin {
    fn default() -> Self {
        Self {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            meters_per_degree_latitude: default_meters_per_degree_latitude(),
            meters_per_degree_longitude: default_meters_per_degree_longitude(),
            auto_update_longitude_scale: default_auto_update(),
        }
    }
}

impl GeoOrigin {
    /// Builds a [GeoOrigin] at given coordinates (decimal degrees),
    /// with default scale factors and auto updated longitude scale.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            ..Default::default()
        }
    }
}

/// Instrument pipeline configuration. Immutable once handed to
/// [InstrumentDataProvider](crate::provider::InstrumentDataProvider) and
/// [InstrumentDisplay](crate::display::InstrumentDisplay): all fields are
/// static settings, not runtime commands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// World units to meters scale factor (> 0)
    #[cfg_attr(feature = "serde", serde(default = "default_world_unit_to_meters"))]
    pub world_unit_to_meters: f64,
    /// Geographic mapping origin. None disables the mapping entirely:
    /// latitude and longitude read as zero and the position readout
    /// falls back to raw world coordinates.
    #[cfg_attr(feature = "serde", serde(default))]
    pub geographic_mapping: Option<GeoOrigin>,
    /// Attitude smoothing factor in [0; 1].
    /// 0 is instantaneous, 1 freezes the horizon.
    #[cfg_attr(feature = "serde", serde(default = "default_smooth_factor"))]
    pub smooth_factor: f64,
    /// Vertical offset applied to the horizon pitch layer,
    /// in pixels per degree of smoothed pitch
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_pitch_pixels_per_degree")
    )]
    pub pitch_pixels_per_degree: f64,
    /// Half range of the vertical speed bar (> 0), in world units per second.
    /// The bar saturates at +/- this rate.
    #[cfg_attr(feature = "serde", serde(default = "default_vsi_range"))]
    pub vsi_range: f64,
    /// Externally supplied fuel fraction in [0; 1].
    /// Placeholder until a fuel system exists.
    #[cfg_attr(feature = "serde", serde(default = "default_fuel_fraction"))]
    pub fuel_fraction: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_unit_to_meters: default_world_unit_to_meters(),
            geographic_mapping: None,
            smooth_factor: default_smooth_factor(),
            pitch_pixels_per_degree: default_pitch_pixels_per_degree(),
            vsi_range: default_vsi_range(),
            fuel_fraction: default_fuel_fraction(),
        }
    }
}

impl Config {
    /// Verifies this [Config] respects all settings ranges.
    pub fn validate(&self) -> Result<(), Error> {
        if self.world_unit_to_meters <= 0.0 {
            return Err(Error::InvalidWorldUnitScale(self.world_unit_to_meters));
        }
        if !(0.0..=1.0).contains(&self.smooth_factor) {
            return Err(Error::InvalidSmoothFactor(self.smooth_factor));
        }
        if self.vsi_range <= 0.0 {
            return Err(Error::InvalidVsiRange(self.vsi_range));
        }
        if !(0.0..=1.0).contains(&self.fuel_fraction) {
            return Err(Error::InvalidFuelFraction(self.fuel_fraction));
        }
        if let Some(origin) = &self.geographic_mapping {
            if origin.meters_per_degree_latitude <= 0.0 {
                return Err(Error::InvalidLatitudeScale(
                    origin.meters_per_degree_latitude,
                ));
            }
            if !origin.auto_update_longitude_scale && origin.meters_per_degree_longitude <= 0.0 {
                return Err(Error::InvalidLongitudeScale(
                    origin.meters_per_degree_longitude,
                ));
            }
        }
        Ok(())
    }
}
