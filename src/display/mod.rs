use crate::{
    cfg::{Config, Error},
    provider::InstrumentDataProvider,
    utils::{inverse_lerp, lerp},
};

mod elements;
pub mod format;

pub use elements::{GaugeElement, HorizonElement, InstrumentPanel, TextElement};

/// [InstrumentDisplay] pulls one [InstrumentSnapshot](crate::prelude::InstrumentSnapshot)
/// per rendering frame, smooths the attitude angles and pushes formatted
/// values to whatever elements the panel binds. The smoothed pitch and
/// roll are the only state carried from one tick to the next.
pub struct InstrumentDisplay {
    /// Pipeline parametrization
    pub cfg: Config,
    /// Bound display elements, all optional
    panel: InstrumentPanel,
    /// Exponentially smoothed pitch [deg]
    smoothed_pitch: f64,
    /// Exponentially smoothed roll [deg]
    smoothed_roll: f64,
}

impl InstrumentDisplay {
    /// Builds a new [InstrumentDisplay] over a (possibly partial)
    /// [InstrumentPanel].
    pub fn new(cfg: Config, panel: InstrumentPanel) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            panel,
            smoothed_pitch: 0.0,
            smoothed_roll: 0.0,
        })
    }

    /// Smoothed pitch [deg] after the latest tick
    pub fn smoothed_pitch(&self) -> f64 {
        self.smoothed_pitch
    }

    /// Smoothed roll [deg] after the latest tick
    pub fn smoothed_roll(&self) -> f64 {
        self.smoothed_roll
    }

    /// One display update, to be invoked once per rendering frame.
    /// Pulls a fresh snapshot from the provider, advances the smoothing
    /// state, then writes every bound element. Never fails: unbound
    /// elements are skipped and the provider itself degrades internally.
    pub fn tick(&mut self, provider: &InstrumentDataProvider) {
        let snapshot = provider.snapshot();

        // single pole exponential filter, visual jitter reduction only:
        // factor 0 tracks instantly, factor 1 freezes the horizon
        let blend = 1.0 - self.cfg.smooth_factor;
        self.smoothed_pitch = lerp(self.smoothed_pitch, snapshot.pitch_deg, blend);
        self.smoothed_roll = lerp(self.smoothed_roll, snapshot.roll_deg, blend);

        if let Some(text) = &mut self.panel.speed_text {
            text.set_text(&format::speed(snapshot.speed_knots));
        }
        if let Some(text) = &mut self.panel.altitude_text {
            text.set_text(&format::altitude(snapshot.altitude_m));
        }
        if let Some(text) = &mut self.panel.heading_text {
            text.set_text(&format::heading(snapshot.heading_deg));
        }
        if let Some(text) = &mut self.panel.pitch_text {
            text.set_text(&format::pitch(snapshot.pitch_deg));
        }
        if let Some(text) = &mut self.panel.roll_text {
            text.set_text(&format::roll(snapshot.roll_deg));
        }
        if let Some(text) = &mut self.panel.vertical_speed_text {
            text.set_text(&format::vertical_speed(snapshot.vertical_speed));
        }
        if let Some(text) = &mut self.panel.position_text {
            if provider.cfg.geographic_mapping.is_some() {
                text.set_text(&format::geographic(
                    snapshot.latitude_deg,
                    snapshot.longitude_deg,
                ));
            } else {
                text.set_text(&format::world_position(snapshot.world_position));
            }
        }

        if let Some(gauge) = &mut self.panel.throttle_gauge {
            gauge.set_fill(snapshot.throttle);
        }
        if let Some(label) = &mut self.panel.throttle_label {
            label.set_text(&format::percent(snapshot.throttle));
        }

        let fuel = self.cfg.fuel_fraction.clamp(0.0, 1.0);
        if let Some(gauge) = &mut self.panel.fuel_gauge {
            gauge.set_fill(fuel);
        }
        if let Some(label) = &mut self.panel.fuel_label {
            label.set_text(&format::percent(fuel));
        }

        let vsi_fill = self.vsi_fill(snapshot.vertical_speed);
        if let Some(gauge) = &mut self.panel.vsi_gauge {
            gauge.set_fill(vsi_fill);
        }

        if let Some(horizon) = &mut self.panel.horizon {
            // horizon rotates opposite to aircraft roll (pilot frame),
            // nose up pitch pushes the graphic down on screen
            horizon.set_rotation_deg(-self.smoothed_roll);
            horizon.set_vertical_offset_px(-self.smoothed_pitch * self.cfg.pitch_pixels_per_degree);
        }
    }

    /// Vertical speed bar fill in [0; 1], 0.5 at zero rate,
    /// saturating at +/- the configured range.
    pub fn vsi_fill(&self, vertical_speed: f64) -> f64 {
        let range = self.cfg.vsi_range;
        inverse_lerp(-range, range, vertical_speed.clamp(-range, range))
    }
}
