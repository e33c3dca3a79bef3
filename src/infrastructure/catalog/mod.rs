//! Built-in Catalogs
//!
//! Each catalog is a product family with the function that registers its
//! builders. `Catalogs` builds all of them once and freezes them for
//! read-only use.

mod car;
mod employee;
mod form;
mod gadget;
mod vehicle;

pub use car::{car_model_registry, register_car_models, CarModelBuilder, MODELS};
pub use employee::{employee_registry, register_employees, EmployeeBuilder};
pub use form::{form_field_registry, register_form_fields, FieldBuilder, FieldProduct};
pub use gadget::{gadget_registry, register_gadgets, GadgetBuilder};
pub use vehicle::{register_vehicles, vehicle_registry, VehicleBuilder};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::domain::registry::{
    Attributes, Discriminator, DuplicatePolicy, FrozenRegistry, Product, RegistryError,
};
use crate::domain::{CarModel, DomainError, Employee, Gadget, Vehicle};

/// Product families shipped with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Catalog {
    Employees,
    Vehicles,
    Gadgets,
    Cars,
    FormFields,
}

impl Catalog {
    pub const ALL: [Catalog; 5] = [
        Self::Employees,
        Self::Vehicles,
        Self::Gadgets,
        Self::Cars,
        Self::FormFields,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Vehicles => "vehicles",
            Self::Gadgets => "gadgets",
            Self::Cars => "cars",
            Self::FormFields => "form_fields",
        }
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Catalog {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "employees" | "employee" => Ok(Self::Employees),
            "vehicles" | "vehicle" => Ok(Self::Vehicles),
            "gadgets" | "gadget" => Ok(Self::Gadgets),
            "cars" | "car" | "car_models" => Ok(Self::Cars),
            "form_fields" | "form_field" | "fields" => Ok(Self::FormFields),
            _ => Err(DomainError::configuration(format!(
                "Unknown catalog: {}. Valid catalogs: employees, vehicles, gadgets, cars, form_fields",
                s
            ))),
        }
    }
}

/// One registration as listed to users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub discriminator: Discriminator,
    pub variant: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub catalog: Catalog,
    pub entries: Vec<CatalogEntry>,
}

/// A product created through `Catalogs::create`, in displayable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedProduct {
    pub catalog: Catalog,
    pub tag: String,
    pub product: Value,
    /// Behavior the product exposes (greetings, engine messages, rendering)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

/// Frozen registries for every built-in catalog
#[derive(Debug, Clone)]
pub struct Catalogs {
    employees: FrozenRegistry<Employee>,
    vehicles: FrozenRegistry<Vehicle>,
    gadgets: FrozenRegistry<Gadget>,
    cars: FrozenRegistry<CarModel>,
    form_fields: FrozenRegistry<FieldProduct>,
}

impl Catalogs {
    /// Populate every catalog, failing fast on any registration error
    pub fn build(policy: DuplicatePolicy) -> Result<Self, RegistryError> {
        let catalogs = Self {
            employees: employee_registry(policy)?.freeze(),
            vehicles: vehicle_registry(policy)?.freeze(),
            gadgets: gadget_registry(policy)?.freeze(),
            cars: car_model_registry(policy)?.freeze(),
            form_fields: form_field_registry(policy)?.freeze(),
        };

        info!(
            policy = ?policy,
            catalogs = Catalog::ALL.len(),
            "Built-in catalogs registered"
        );

        Ok(catalogs)
    }

    pub fn employees(&self) -> &FrozenRegistry<Employee> {
        &self.employees
    }

    pub fn vehicles(&self) -> &FrozenRegistry<Vehicle> {
        &self.vehicles
    }

    pub fn gadgets(&self) -> &FrozenRegistry<Gadget> {
        &self.gadgets
    }

    pub fn cars(&self) -> &FrozenRegistry<CarModel> {
        &self.cars
    }

    pub fn form_fields(&self) -> &FrozenRegistry<FieldProduct> {
        &self.form_fields
    }

    pub fn summaries(&self) -> Vec<CatalogSummary> {
        Catalog::ALL
            .into_iter()
            .map(|catalog| CatalogSummary {
                catalog,
                entries: self.entries(catalog),
            })
            .collect()
    }

    pub fn entries(&self, catalog: Catalog) -> Vec<CatalogEntry> {
        match catalog {
            Catalog::Employees => summarize(&self.employees),
            Catalog::Vehicles => summarize(&self.vehicles),
            Catalog::Gadgets => summarize(&self.gadgets),
            Catalog::Cars => summarize(&self.cars),
            Catalog::FormFields => summarize(&self.form_fields),
        }
    }

    /// Create a product in `catalog` and convert it for display
    pub fn create(
        &self,
        catalog: Catalog,
        discriminator: impl Into<Discriminator>,
        attributes: &Attributes,
    ) -> Result<CreatedProduct, RegistryError> {
        let discriminator = discriminator.into();

        let created = match catalog {
            Catalog::Employees => {
                let employee = self.employees.create(discriminator, attributes)?;
                let greeting = employee.greeting();
                display_product(catalog, &employee, to_json(&employee), vec![greeting])
            }
            Catalog::Vehicles => {
                let vehicle = self.vehicles.create(discriminator, attributes)?;
                let messages = vec![
                    vehicle.start_engine(),
                    vehicle.drive(),
                    vehicle.stop_engine(),
                ];
                display_product(catalog, &vehicle, to_json(&vehicle), messages)
            }
            Catalog::Gadgets => {
                let gadget = self.gadgets.create(discriminator, attributes)?;
                display_product(catalog, &gadget, to_json(&gadget), Vec::new())
            }
            Catalog::Cars => {
                let car = self.cars.create(discriminator, attributes)?;
                display_product(catalog, &car, to_json(&car), Vec::new())
            }
            Catalog::FormFields => {
                let field = self.form_fields.create(discriminator, attributes)?;
                let product = json!({ "type": field.tag(), "spec": to_json(field.spec()) });
                display_product(catalog, &field, product, vec![field.render()])
            }
        };

        Ok(created)
    }
}

fn summarize<P: Product + 'static>(registry: &FrozenRegistry<P>) -> Vec<CatalogEntry> {
    registry
        .entries()
        .into_iter()
        .map(|(discriminator, variant)| CatalogEntry {
            discriminator: discriminator.clone(),
            variant: variant.to_string(),
        })
        .collect()
}

fn display_product<P: Product>(
    catalog: Catalog,
    product: &P,
    json: Value,
    messages: Vec<String>,
) -> CreatedProduct {
    CreatedProduct {
        catalog,
        tag: product.tag().to_string(),
        product: json,
        messages,
    }
}

/// Products and field specs derive `Serialize` over string-keyed structs, so
/// conversion to a JSON value does not fail for them.
fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogs() -> Catalogs {
        Catalogs::build(DuplicatePolicy::Reject).unwrap()
    }

    #[test]
    fn test_catalog_from_str() {
        assert_eq!("vehicles".parse::<Catalog>().unwrap(), Catalog::Vehicles);
        assert_eq!("Employee".parse::<Catalog>().unwrap(), Catalog::Employees);
        assert_eq!("form-fields".parse::<Catalog>().unwrap(), Catalog::FormFields);
        assert!("boats".parse::<Catalog>().is_err());
    }

    #[test]
    fn test_summaries_list_every_catalog() {
        let summaries = catalogs().summaries();
        assert_eq!(summaries.len(), 5);

        let employees = &summaries[0];
        assert_eq!(employees.catalog, Catalog::Employees);
        let variants: Vec<_> = employees.entries.iter().map(|e| e.variant.as_str()).collect();
        assert_eq!(variants, vec!["Developer", "Tester", "Designer"]);
    }

    #[test]
    fn test_create_employee() {
        let created = catalogs()
            .create(Catalog::Employees, 1, &Attributes::new().with("name", "Patrick"))
            .unwrap();

        assert_eq!(created.tag, "Developer");
        assert_eq!(created.product, json!({"name": "Patrick", "type": "Developer"}));
        assert_eq!(created.messages, vec!["Hi, I am Patrick and I am a Developer"]);
    }

    #[test]
    fn test_create_vehicle() {
        let created = catalogs()
            .create(
                Catalog::Vehicles,
                "car",
                &Attributes::new().with("doors", 2).with("color", "black"),
            )
            .unwrap();

        assert_eq!(
            created.product,
            json!({"vehicleType": "car", "wheels": 4, "doors": 2, "color": "black"})
        );
        assert_eq!(created.messages[0], "Revving car engine");
    }

    #[test]
    fn test_create_form_field() {
        let created = catalogs()
            .create(
                Catalog::FormFields,
                "gender",
                &Attributes::new()
                    .with("id", "item-id-4")
                    .with("options", json!(["male", "female"])),
            )
            .unwrap();

        assert_eq!(created.tag, "gender");
        assert_eq!(created.product["spec"]["id"], "item-id-4");
        assert_eq!(
            created.messages,
            vec!["[gender] item-id-4 (one of: male / female)"]
        );
    }

    #[test]
    fn test_create_in_wrong_catalog() {
        let result = catalogs().create(Catalog::Gadgets, "car", &Attributes::new());
        assert!(result.unwrap_err().is_unknown_discriminator());
    }
}
