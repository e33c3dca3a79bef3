//! Vehicle entity

use serde::{Deserialize, Serialize};

use crate::domain::registry::Product;

/// Vehicle variants the factory can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Truck,
    Bus,
    Motorcycle,
}

/// Values used for attributes the caller leaves out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleDefaults {
    pub wheels: u32,
    pub doors: u32,
    pub color: &'static str,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 4] = [Self::Car, Self::Truck, Self::Bus, Self::Motorcycle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "truck",
            Self::Bus => "bus",
            Self::Motorcycle => "motorcycle",
        }
    }

    pub fn defaults(&self) -> VehicleDefaults {
        match self {
            Self::Car => VehicleDefaults {
                wheels: 4,
                doors: 4,
                color: "silver",
            },
            Self::Truck => VehicleDefaults {
                wheels: 6,
                doors: 2,
                color: "red",
            },
            Self::Bus => VehicleDefaults {
                wheels: 4,
                doors: 4,
                color: "white",
            },
            Self::Motorcycle => VehicleDefaults {
                wheels: 2,
                doors: 0,
                color: "black",
            },
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vehicle of one kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "vehicleType")]
    pub kind: VehicleKind,
    pub wheels: u32,
    pub doors: u32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(rename = "plateNo", skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,
}

impl Vehicle {
    /// A vehicle with every attribute at its kind's default
    pub fn with_defaults(kind: VehicleKind) -> Self {
        let defaults = kind.defaults();
        Self {
            kind,
            wheels: defaults.wheels,
            doors: defaults.doors,
            color: defaults.color.to_string(),
            manufacturer: None,
            plate_number: None,
        }
    }

    pub fn start_engine(&self) -> String {
        format!("Revving {} engine", self.kind)
    }

    pub fn drive(&self) -> String {
        format!("Driving {}...", self.kind)
    }

    pub fn stop_engine(&self) -> String {
        format!("Stopping {} engine", self.kind)
    }
}

impl Product for Vehicle {
    fn tag(&self) -> &str {
        self.kind.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_defaults() {
        let car = Vehicle::with_defaults(VehicleKind::Car);
        assert_eq!(car.wheels, 4);
        assert_eq!(car.doors, 4);
        assert_eq!(car.color, "silver");
        assert_eq!(car.tag(), "car");
    }

    #[test]
    fn test_motorcycle_has_no_doors() {
        let motorcycle = Vehicle::with_defaults(VehicleKind::Motorcycle);
        assert_eq!(motorcycle.wheels, 2);
        assert_eq!(motorcycle.doors, 0);
    }

    #[test]
    fn test_engine_messages_use_own_kind() {
        let bus = Vehicle::with_defaults(VehicleKind::Bus);
        assert_eq!(bus.start_engine(), "Revving bus engine");
        assert_eq!(bus.drive(), "Driving bus...");
        assert_eq!(bus.stop_engine(), "Stopping bus engine");
    }

    #[test]
    fn test_serialize_skips_empty_optionals() {
        let truck = Vehicle::with_defaults(VehicleKind::Truck);
        let json = serde_json::to_value(&truck).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vehicleType": "truck",
                "wheels": 6,
                "doors": 2,
                "color": "red"
            })
        );
    }
}
