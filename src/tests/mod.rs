mod geo;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use log::LevelFilter;

use crate::prelude::{
    GaugeElement, HorizonElement, SpatialState, TextElement, UnitQuaternion, Vector3,
    VehicleStateSource,
};
use crate::vehicle::OrientationFrame;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Builds an [OrientationFrame] from aviation angles (decimal degrees):
/// yaw about world up, then pitch about body right (nose up positive),
/// then roll about body forward (right wing down positive).
pub fn frame(heading_deg: f64, pitch_deg: f64, roll_deg: f64) -> OrientationFrame {
    let attitude = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), heading_deg.to_radians())
        * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -pitch_deg.to_radians())
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -roll_deg.to_radians());
    OrientationFrame::from_quaternion(&attitude)
}

/// Scripted [VehicleStateSource] for the test benches.
pub struct FakeVehicle {
    pub state: Option<SpatialState>,
    pub airspeed: Option<f64>,
    pub throttle: f64,
}

impl Default for FakeVehicle {
    fn default() -> Self {
        Self {
            state: Some(SpatialState::default()),
            airspeed: None,
            throttle: 0.0,
        }
    }
}

impl VehicleStateSource for FakeVehicle {
    fn spatial_state(&self) -> Option<SpatialState> {
        self.state
    }

    fn airspeed_mps(&self) -> Option<f64> {
        self.airspeed
    }

    fn throttle(&self) -> f64 {
        self.throttle
    }
}

/// Text element recording the latest write.
pub struct RecordedText(pub Rc<RefCell<String>>);

impl RecordedText {
    pub fn new() -> (Self, Rc<RefCell<String>>) {
        let cell = Rc::new(RefCell::new(String::new()));
        (Self(cell.clone()), cell)
    }
}

impl TextElement for RecordedText {
    fn set_text(&mut self, text: &str) {
        *self.0.borrow_mut() = text.to_string();
    }
}

/// Gauge element recording the latest fill ratio.
pub struct RecordedGauge(pub Rc<RefCell<f64>>);

impl RecordedGauge {
    pub fn new() -> (Self, Rc<RefCell<f64>>) {
        let cell = Rc::new(RefCell::new(f64::NAN));
        (Self(cell.clone()), cell)
    }
}

impl GaugeElement for RecordedGauge {
    fn set_fill(&mut self, ratio: f64) {
        *self.0.borrow_mut() = ratio;
    }
}

/// Horizon element recording the latest transform.
pub struct RecordedHorizon {
    pub rotation_deg: Rc<RefCell<f64>>,
    pub vertical_offset_px: Rc<RefCell<f64>>,
}

impl RecordedHorizon {
    pub fn new() -> (Self, Rc<RefCell<f64>>, Rc<RefCell<f64>>) {
        let rotation = Rc::new(RefCell::new(0.0));
        let offset = Rc::new(RefCell::new(0.0));
        (
            Self {
                rotation_deg: rotation.clone(),
                vertical_offset_px: offset.clone(),
            },
            rotation,
            offset,
        )
    }
}

impl HorizonElement for RecordedHorizon {
    fn set_rotation_deg(&mut self, degrees: f64) {
        *self.rotation_deg.borrow_mut() = degrees;
    }

    fn set_vertical_offset_px(&mut self, pixels: f64) {
        *self.vertical_offset_px.borrow_mut() = pixels;
    }
}
