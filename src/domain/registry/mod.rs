//! Construction registry domain module
//!
//! A registry maps a discriminator (integer or string) to a builder that
//! constructs one product variant from caller-supplied attributes.
//!
//! ## Core Types
//!
//! - `ConstructionRegistry` - the discriminator → builder table
//! - `ProductBuilder` - builds one variant; `FnBuilder` wraps a closure
//! - `Product` - anything a registry can return, tagged with its variant
//! - `DedicatedFactory` - a registry view bound to a single variant
//! - `FrozenRegistry` - read-only registry shared across threads

mod attributes;
mod builder;
mod discriminator;
mod error;
mod product;
#[allow(clippy::module_inception)]
mod registry;

pub use attributes::Attributes;
pub use builder::{FnBuilder, ProductBuilder};
pub use discriminator::Discriminator;
pub use error::{BuildError, RegistryError};
pub use product::Product;
pub use registry::{
    ConstructionRegistry, DedicatedFactory, DuplicatePolicy, FrozenRegistry, Registration,
    SharedBuilder,
};
