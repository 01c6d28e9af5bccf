use log::{debug, info};

use crate::{
    attitude,
    cfg::{Config, Error},
    constants::MPS_TO_KNOTS,
    geo,
    snapshot::InstrumentSnapshot,
    vehicle::{SpatialState, VehicleStateSource},
};

/// [InstrumentDataProvider] turns the vehicle's spatial state into an
/// [InstrumentSnapshot], once per update tick. It is pure per call:
/// nothing is cached between calls and nothing in here can fail once
/// constructed. The vehicle is only ever read, never written.
pub struct InstrumentDataProvider {
    /// Pipeline parametrization
    pub cfg: Config,
    /// Read only spatial state source
    vehicle: Box<dyn VehicleStateSource>,
}

impl InstrumentDataProvider {
    /// Builds a new [InstrumentDataProvider].
    /// ## Inputs
    /// - cfg: pipeline [Config], validated here once and for all
    /// - vehicle: [VehicleStateSource] implementation to follow
    pub fn new(cfg: Config, vehicle: Box<dyn VehicleStateSource>) -> Result<Self, Error> {
        cfg.validate()?;
        if let Some(origin) = &cfg.geographic_mapping {
            info!(
                "geographic mapping enabled, origin lat={:.5}°, lon={:.5}°",
                origin.latitude_deg, origin.longitude_deg
            );
        }
        Ok(Self { cfg, vehicle })
    }

    /// Derives one [InstrumentSnapshot] from the vehicle state at call
    /// time. Callable any number of times per tick. A missing vehicle
    /// state degrades to the level-at-origin default instead of failing.
    pub fn snapshot(&self) -> InstrumentSnapshot {
        let state = self.vehicle.spatial_state().unwrap_or_else(|| {
            debug!("vehicle state unavailable, degrading to defaults");
            SpatialState::default()
        });

        // vehicle reported airspeed wins over raw velocity magnitude:
        // the flight model may be wind relative
        let speed_mps = self
            .vehicle
            .airspeed_mps()
            .unwrap_or_else(|| state.linear_velocity.norm());

        let (latitude_deg, longitude_deg) = match &self.cfg.geographic_mapping {
            Some(origin) => {
                geo::latitude_longitude_degrees(origin, state.position, self.cfg.world_unit_to_meters)
            },
            None => (0.0, 0.0),
        };

        InstrumentSnapshot {
            speed_mps,
            speed_knots: speed_mps * MPS_TO_KNOTS,
            altitude_m: state.position.y * self.cfg.world_unit_to_meters,
            heading_deg: attitude::heading_degrees(&state.frame),
            pitch_deg: attitude::pitch_degrees(&state.frame),
            roll_deg: attitude::roll_degrees(&state.frame),
            vertical_speed: state.linear_velocity.y,
            latitude_deg,
            longitude_deg,
            world_position: state.position,
            throttle: self.vehicle.throttle().clamp(0.0, 1.0),
        }
    }
}
