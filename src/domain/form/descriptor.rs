//! Form descriptors as delivered by a server

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::domain::registry::{Attributes, BuildError, Discriminator};

/// Error type for loading form definitions
#[derive(Debug, Error)]
pub enum FormDefinitionError {
    #[error("Failed to read form definition: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse form definition: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings shared by every field type.
///
/// Settings that do not apply to a field type are ignored by it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Some payloads spell this key "required:"
    #[serde(default, alias = "required:", deserialize_with = "null_as_default")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl FieldSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub fn with_date_range(mut self, min: NaiveDate, max: NaiveDate) -> Self {
        self.min_date = Some(min);
        self.max_date = Some(max);
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// One entry of a form definition: a field type plus its settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormItem {
    #[serde(rename = "type")]
    pub field_type: String,

    #[serde(flatten)]
    pub spec: FieldSpec,
}

impl FormItem {
    pub fn new(field_type: impl Into<String>, spec: FieldSpec) -> Self {
        Self {
            field_type: field_type.into(),
            spec,
        }
    }

    pub fn discriminator(&self) -> Discriminator {
        Discriminator::from(self.field_type.as_str())
    }

    /// The whole item as builder attributes
    pub fn attributes(&self) -> Result<Attributes, BuildError> {
        let value = serde_json::to_value(self)
            .map_err(|e| BuildError::invalid_attributes(e.to_string()))?;
        Attributes::from_value(value)
    }
}

/// List of form items, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub items: Vec<FormItem>,
}

impl FormDefinition {
    pub fn from_json(content: &str) -> Result<Self, FormDefinitionError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FormDefinitionError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
