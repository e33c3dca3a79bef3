//! Gadget catalog

use tracing::debug;

use crate::domain::gadget::{Gadget, GadgetKind};
use crate::domain::registry::{
    Attributes, BuildError, ConstructionRegistry, DuplicatePolicy, ProductBuilder, RegistryError,
};

#[derive(Debug, Clone, Copy)]
pub struct GadgetBuilder {
    kind: GadgetKind,
}

impl GadgetBuilder {
    pub fn new(kind: GadgetKind) -> Self {
        Self { kind }
    }
}

impl ProductBuilder<Gadget> for GadgetBuilder {
    fn variant(&self) -> &str {
        self.kind.as_str()
    }

    fn build(&self, attributes: &Attributes) -> Result<Gadget, BuildError> {
        let network = if self.kind.has_network() {
            attributes.text("network")?
        } else {
            None
        };

        Ok(Gadget {
            kind: self.kind,
            name: attributes.str("name")?.unwrap_or_default().to_string(),
            ram: attributes.u32("ram")?.unwrap_or(0),
            hdd: attributes.u32("hdd")?.unwrap_or(0),
            network,
        })
    }
}

pub fn register_gadgets(registry: &mut ConstructionRegistry<Gadget>) -> Result<(), RegistryError> {
    for kind in GadgetKind::ALL {
        registry.register(kind.as_str(), GadgetBuilder::new(kind))?;
        debug!(variant = kind.as_str(), "Registered gadget builder");
    }

    Ok(())
}

pub fn gadget_registry(
    policy: DuplicatePolicy,
) -> Result<ConstructionRegistry<Gadget>, RegistryError> {
    let mut registry = ConstructionRegistry::with_policy(policy);
    register_gadgets(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::Product;

    #[test]
    fn test_create_tablet() {
        let registry = gadget_registry(DuplicatePolicy::Reject).unwrap();

        let tablet = registry
            .create(
                "Tablet",
                &Attributes::new()
                    .with("ram", 4)
                    .with("hdd", 128)
                    .with("name", "Bab's iPad")
                    .with("network", "4G"),
            )
            .unwrap();

        assert_eq!(tablet.tag(), "Tablet");
        assert_eq!(tablet.ram, 4);
        assert_eq!(tablet.hdd, 128);
        assert_eq!(tablet.network.as_deref(), Some("4G"));
    }

    #[test]
    fn test_laptop_ignores_unknown_keys() {
        let registry = gadget_registry(DuplicatePolicy::Reject).unwrap();

        let laptop = registry
            .create(
                "Laptop",
                &Attributes::new()
                    .with("ram", 8)
                    .with("ssd", 256)
                    .with("name", "Bab's MacBook Pro")
                    .with("network", "4G"),
            )
            .unwrap();

        assert_eq!(laptop.ram, 8);
        assert_eq!(laptop.hdd, 0);
        assert_eq!(laptop.network, None);
    }

    #[test]
    fn test_empty_gadget() {
        let registry = gadget_registry(DuplicatePolicy::Reject).unwrap();

        let laptop = registry.create("Laptop", &Attributes::new()).unwrap();
        assert_eq!(laptop, Gadget::new(GadgetKind::Laptop, ""));
    }

    #[test]
    fn test_lowercase_key_is_unknown() {
        let registry = gadget_registry(DuplicatePolicy::Reject).unwrap();
        assert!(registry
            .create("laptop", &Attributes::new())
            .unwrap_err()
            .is_unknown_discriminator());
    }
}
