#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod attitude;
mod cfg;
mod constants;
mod display;
mod geo;
mod provider;
mod snapshot;
mod utils;
mod vehicle;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, Error, GeoOrigin};
    pub use crate::display::{
        GaugeElement, HorizonElement, InstrumentDisplay, InstrumentPanel, TextElement,
    };
    pub use crate::provider::InstrumentDataProvider;
    pub use crate::snapshot::InstrumentSnapshot;
    pub use crate::vehicle::{OrientationFrame, SpatialState, VehicleStateSource};
    // re-export
    pub use nalgebra::{UnitQuaternion, Vector3};
}

pub use cfg::Error;
