//! Factory Registry
//!
//! Builds products from a discriminator and an attribute set through a
//! registry of builders, with support for:
//! - Integer and string discriminators
//! - Configurable duplicate handling (reject or replace)
//! - Built-in catalogs (employees, vehicles, gadgets, car models, form fields)
//! - Assembling forms from JSON definitions

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::registry::{
    Attributes, BuildError, ConstructionRegistry, Discriminator, DuplicatePolicy, FrozenRegistry,
    Product, ProductBuilder, RegistryError,
};
