//! Vehicle catalog

use tracing::debug;

use crate::domain::registry::{
    Attributes, BuildError, ConstructionRegistry, DuplicatePolicy, ProductBuilder, RegistryError,
};
use crate::domain::vehicle::{Vehicle, VehicleKind};

/// Builds vehicles of one kind, filling unset attributes from the kind's defaults
#[derive(Debug, Clone, Copy)]
pub struct VehicleBuilder {
    kind: VehicleKind,
}

impl VehicleBuilder {
    pub fn new(kind: VehicleKind) -> Self {
        Self { kind }
    }
}

impl ProductBuilder<Vehicle> for VehicleBuilder {
    fn variant(&self) -> &str {
        self.kind.as_str()
    }

    fn build(&self, attributes: &Attributes) -> Result<Vehicle, BuildError> {
        let defaults = self.kind.defaults();

        Ok(Vehicle {
            kind: self.kind,
            wheels: attributes.u32("wheels")?.unwrap_or(defaults.wheels),
            doors: attributes.u32("doors")?.unwrap_or(defaults.doors),
            color: attributes
                .str("color")?
                .unwrap_or(defaults.color)
                .to_string(),
            manufacturer: attributes.str("manufacturer")?.map(str::to_string),
            plate_number: attributes.text("plateNo")?,
        })
    }
}

/// Register a builder for every vehicle kind
pub fn register_vehicles(registry: &mut ConstructionRegistry<Vehicle>) -> Result<(), RegistryError> {
    for kind in VehicleKind::ALL {
        registry.register(kind.as_str(), VehicleBuilder::new(kind))?;
        debug!(variant = kind.as_str(), "Registered vehicle builder");
    }

    Ok(())
}

pub fn vehicle_registry(
    policy: DuplicatePolicy,
) -> Result<ConstructionRegistry<Vehicle>, RegistryError> {
    let mut registry = ConstructionRegistry::with_policy(policy);
    register_vehicles(&mut registry)?;
    Ok(registry)
}
