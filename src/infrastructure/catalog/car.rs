//! Car model catalog
//!
//! Each model has its own builder keyed by its designation, so a new model is
//! one more entry in `MODELS`.

use tracing::debug;

use crate::domain::car::{designation, CarModel};
use crate::domain::registry::{
    Attributes, BuildError, ConstructionRegistry, DuplicatePolicy, ProductBuilder, RegistryError,
};

/// Models available out of the box, as (make, model)
pub const MODELS: [(&str, &str); 3] = [("Audi", "A5"), ("Mercedes", "C200"), ("Mercedes", "A180")];

#[derive(Debug, Clone)]
pub struct CarModelBuilder {
    designation: String,
    make: String,
    model: String,
}

impl CarModelBuilder {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        let make = make.into();
        let model = model.into();

        Self {
            designation: designation(&make, &model),
            make,
            model,
        }
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }
}

impl ProductBuilder<CarModel> for CarModelBuilder {
    fn variant(&self) -> &str {
        &self.designation
    }

    fn build(&self, attributes: &Attributes) -> Result<CarModel, BuildError> {
        let car = CarModel::new(&self.make, &self.model);

        Ok(match attributes.str("color")? {
            Some(color) => car.with_color(color),
            None => car,
        })
    }
}

pub fn register_car_models(
    registry: &mut ConstructionRegistry<CarModel>,
) -> Result<(), RegistryError> {
    for (make, model) in MODELS {
        let builder = CarModelBuilder::new(make, model);
        let key = builder.designation().to_string();

        registry.register(key.as_str(), builder)?;
        debug!(variant = %key, "Registered car model builder");
    }

    Ok(())
}

pub fn car_model_registry(
    policy: DuplicatePolicy,
) -> Result<ConstructionRegistry<CarModel>, RegistryError> {
    let mut registry = ConstructionRegistry::with_policy(policy);
    register_car_models(&mut registry)?;
    Ok(registry)
}
