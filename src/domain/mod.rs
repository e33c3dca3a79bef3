//! Domain layer - Construction registry and product entities

pub mod car;
pub mod employee;
pub mod error;
pub mod form;
pub mod gadget;
pub mod registry;
pub mod vehicle;

pub use car::CarModel;
pub use employee::{Employee, EmployeeRole};
pub use error::DomainError;
pub use form::{
    FieldSpec, FieldValidationError, FormDefinition, FormDefinitionError, FormField, FormItem,
};
pub use gadget::{Gadget, GadgetKind};
pub use registry::{
    Attributes, BuildError, ConstructionRegistry, DedicatedFactory, Discriminator,
    DuplicatePolicy, FnBuilder, FrozenRegistry, Product, ProductBuilder, Registration,
    RegistryError,
};
pub use vehicle::{Vehicle, VehicleKind};
