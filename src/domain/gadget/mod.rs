//! Gadget domain module

use serde::{Deserialize, Serialize};

use crate::domain::registry::Product;

/// Gadget variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GadgetKind {
    Laptop,
    Tablet,
}

impl GadgetKind {
    pub const ALL: [GadgetKind; 2] = [Self::Laptop, Self::Tablet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Laptop => "Laptop",
            Self::Tablet => "Tablet",
        }
    }

    /// Only tablets carry a network attribute
    pub fn has_network(&self) -> bool {
        matches!(self, Self::Tablet)
    }
}

/// A laptop or tablet with its specs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gadget {
    #[serde(rename = "type")]
    pub kind: GadgetKind,
    pub name: String,
    /// Memory in GB
    pub ram: u32,
    /// Storage in GB
    pub hdd: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl Gadget {
    pub fn new(kind: GadgetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            ram: 0,
            hdd: 0,
            network: None,
        }
    }
}

impl Product for Gadget {
    fn tag(&self) -> &str {
        self.kind.as_str()
    }
}
