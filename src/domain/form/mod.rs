//! Form field domain module
//!
//! Forms are described by a list of items received from a server; each item
//! names a field type, which selects the field product to build.

mod descriptor;
mod field;
pub mod validation;

pub use descriptor::{FieldSpec, FormDefinition, FormDefinitionError, FormItem};
pub use field::{BirthdayField, FormField, GenderField, PasswordField, UsernameField};
pub use validation::FieldValidationError;
