//! Vehicle domain module

mod entity;

pub use entity::{Vehicle, VehicleDefaults, VehicleKind};
