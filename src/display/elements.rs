/// Write only text capability of a display element.
pub trait TextElement {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

/// Write only fill capability of a bar or dial element.
pub trait GaugeElement {
    /// Set the normalized fill ratio, always handed a value in [0; 1].
    fn set_fill(&mut self, ratio: f64);
}

/// Write only 2D transform capability of the artificial horizon
/// graphic: a roll layer (rotation about the view axis) nesting a
/// pitch layer (vertical translation).
pub trait HorizonElement {
    /// Rotate the roll layer, decimal degrees about the view axis.
    fn set_rotation_deg(&mut self, degrees: f64);
    /// Translate the pitch layer vertically, pixels, screen-down positive.
    fn set_vertical_offset_px(&mut self, pixels: f64);
}

/// One optional binding per instrument. Unbound elements are silently
/// skipped on every tick, so a partial panel is a valid configuration.
#[derive(Default)]
pub struct InstrumentPanel {
    /// Airspeed readout
    pub speed_text: Option<Box<dyn TextElement>>,
    /// Altitude readout
    pub altitude_text: Option<Box<dyn TextElement>>,
    /// Compass heading readout
    pub heading_text: Option<Box<dyn TextElement>>,
    /// Pitch readout
    pub pitch_text: Option<Box<dyn TextElement>>,
    /// Roll readout
    pub roll_text: Option<Box<dyn TextElement>>,
    /// Vertical speed readout
    pub vertical_speed_text: Option<Box<dyn TextElement>>,
    /// Geographic (or raw world position) readout
    pub position_text: Option<Box<dyn TextElement>>,
    /// Throttle percentage label
    pub throttle_label: Option<Box<dyn TextElement>>,
    /// Fuel percentage label
    pub fuel_label: Option<Box<dyn TextElement>>,
    /// Throttle bar
    pub throttle_gauge: Option<Box<dyn GaugeElement>>,
    /// Fuel bar
    pub fuel_gauge: Option<Box<dyn GaugeElement>>,
    /// Vertical speed bar, 0.5 at zero rate
    pub vsi_gauge: Option<Box<dyn GaugeElement>>,
    /// Artificial horizon graphic
    pub horizon: Option<Box<dyn HorizonElement>>,
}

impl InstrumentPanel {
    pub fn with_speed_text(mut self, element: Box<dyn TextElement>) -> Self {
        self.speed_text = Some(element);
        self
    }

    pub fn with_altitude_text(mut self, element: Box<dyn TextElement>) -> Self {
        self.altitude_text = Some(element);
        self
    }

    pub fn with_heading_text(mut self, element: Box<dyn TextElement>) -> Self {
        self.heading_text = Some(element);
        self
    }

    pub fn with_pitch_text(mut self, element: Box<dyn TextElement>) -> Self {
        self.pitch_text = Some(element);
        self
    }

    pub fn with_roll_text(mut self, element: Box<dyn TextElement>) -> Self {
        self.roll_text = Some(element);
        self
    }

    pub fn with_vertical_speed_text(mut self, element: Box<dyn TextElement>) -> Self {
        self.vertical_speed_text = Some(element);
        self
    }

    pub fn with_position_text(mut self, element: Box<dyn TextElement>) -> Self {
        self.position_text = Some(element);
        self
    }

    pub fn with_throttle_label(mut self, element: Box<dyn TextElement>) -> Self {
        self.throttle_label = Some(element);
        self
    }

    pub fn with_fuel_label(mut self, element: Box<dyn TextElement>) -> Self {
        self.fuel_label = Some(element);
        self
    }

    pub fn with_throttle_gauge(mut self, element: Box<dyn GaugeElement>) -> Self {
        self.throttle_gauge = Some(element);
        self
    }

    pub fn with_fuel_gauge(mut self, element: Box<dyn GaugeElement>) -> Self {
        self.fuel_gauge = Some(element);
        self
    }

    pub fn with_vsi_gauge(mut self, element: Box<dyn GaugeElement>) -> Self {
        self.vsi_gauge = Some(element);
        self
    }

    pub fn with_horizon(mut self, element: Box<dyn HorizonElement>) -> Self {
        self.horizon = Some(element);
        self
    }
}
