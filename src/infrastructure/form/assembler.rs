//! Form assembly
//!
//! Feeds each item of a form definition through the form field registry and
//! collects the resulting fields in definition order.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::domain::form::{FieldValidationError, FormDefinition, FormField};
use crate::domain::registry::{Discriminator, FrozenRegistry, RegistryError};
use crate::infrastructure::catalog::FieldProduct;

/// Item left out of an assembled form because its type is not registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    pub id: String,
    pub field_type: Discriminator,
}

/// Fields built from a form definition
#[derive(Debug)]
pub struct AssembledForm {
    pub fields: Vec<FieldProduct>,
    pub skipped: Vec<SkippedItem>,
}

impl AssembledForm {
    pub fn field(&self, id: &str) -> Option<&dyn FormField> {
        self.fields
            .iter()
            .find(|field| field.id() == id)
            .map(|field| &**field)
    }

    /// One rendered line per field, in order
    pub fn render(&self) -> Vec<String> {
        self.fields.iter().map(|field| field.render()).collect()
    }

    /// Validate user inputs keyed by field id; fields without input get "".
    ///
    /// Returns the failures keyed by field id.
    pub fn validate(
        &self,
        inputs: &HashMap<String, String>,
    ) -> BTreeMap<String, FieldValidationError> {
        self.fields
            .iter()
            .filter_map(|field| {
                let input = inputs.get(field.id()).map(String::as_str).unwrap_or("");
                field
                    .validate(input)
                    .err()
                    .map(|error| (field.id().to_string(), error))
            })
            .collect()
    }
}

/// Builds forms from definitions using a form field registry
#[derive(Debug, Clone)]
pub struct FormAssembler {
    registry: FrozenRegistry<FieldProduct>,
    skip_unknown: bool,
}

impl FormAssembler {
    /// Create an assembler that skips items of unknown type
    pub fn new(registry: FrozenRegistry<FieldProduct>) -> Self {
        Self {
            registry,
            skip_unknown: true,
        }
    }

    /// Choose between skipping unknown item types and failing on them
    pub fn with_skip_unknown(mut self, skip_unknown: bool) -> Self {
        self.skip_unknown = skip_unknown;
        self
    }

    /// Build every item of `definition`.
    ///
    /// Builder failures always abort; unknown types abort only when skipping
    /// is disabled.
    pub fn assemble(&self, definition: &FormDefinition) -> Result<AssembledForm, RegistryError> {
        let mut fields = Vec::with_capacity(definition.items.len());
        let mut skipped = Vec::new();

        for item in &definition.items {
            let attributes = item
                .attributes()
                .map_err(|e| RegistryError::builder_invocation(item.discriminator(), e))?;

            match self.registry.create(item.discriminator(), &attributes) {
                Ok(field) => {
                    debug!(id = %item.spec.id, field_type = %item.field_type, "Built form field");
                    fields.push(field);
                }
                Err(RegistryError::UnknownDiscriminator { discriminator }) if self.skip_unknown => {
                    warn!(
                        id = %item.spec.id,
                        field_type = %discriminator,
                        "Skipping form item of unknown type"
                    );
                    skipped.push(SkippedItem {
                        id: item.spec.id.clone(),
                        field_type: discriminator,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(AssembledForm { fields, skipped })
    }
}
