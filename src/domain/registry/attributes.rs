//! Caller-supplied attributes passed through to builders

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::BuildError;

/// Mapping from field name to value, handed to a builder unchanged.
///
/// The accessors treat an absent key and an explicit `null` the same way:
/// both yield `None`, so the builder's default applies. Any other value is
/// kept as given, including `0` and `""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build attributes from a JSON value, which must be an object (or null)
    pub fn from_value(value: Value) -> Result<Self, BuildError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(BuildError::invalid_attributes(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Raw value for a key; `null` counts as missing
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn str(&self, key: &str) -> Result<Option<&str>, BuildError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(type_error(key, "a string", other)),
        }
    }

    pub fn required_str(&self, key: &str) -> Result<&str, BuildError> {
        self.str(key)?
            .ok_or_else(|| BuildError::missing_attribute(key))
    }

    /// A value usable as text; numbers are rendered with their JSON form
    pub fn text(&self, key: &str) -> Result<Option<String>, BuildError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(type_error(key, "a string or number", other)),
        }
    }

    pub fn u32(&self, key: &str) -> Result<Option<u32>, BuildError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| type_error(key, "an unsigned 32-bit integer", value)),
        }
    }

    pub fn bool(&self, key: &str) -> Result<Option<bool>, BuildError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(type_error(key, "a boolean", other)),
        }
    }

    /// Deserialize the whole attribute map into a typed spec.
    ///
    /// Top-level `null` entries are dropped first, so they reach `T` as absent
    /// keys and take the field defaults.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, BuildError> {
        let present: Map<String, Value> = self
            .0
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        serde_json::from_value(Value::Object(present))
            .map_err(|e| BuildError::invalid_attributes(e.to_string()))
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn type_error(key: &str, expected: &str, actual: &Value) -> BuildError {
    BuildError::invalid_attribute(
        key,
        format!("expected {}, got {}", expected, json_type_name(actual)),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
