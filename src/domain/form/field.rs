//! Form field trait and the built-in field types

use crate::domain::registry::Product;

use super::descriptor::FieldSpec;
use super::validation::{
    validate_date, validate_length, validate_option, validate_username_characters,
    FieldValidationError,
};

/// A form field: something that can describe itself and check user input.
///
/// The product tag of a field is its field type ("username", "gender", ...).
pub trait FormField: Product {
    fn spec(&self) -> &FieldSpec;

    fn id(&self) -> &str {
        &self.spec().id
    }

    /// One-line text description of the field
    fn render(&self) -> String;

    /// Validate a non-empty input against the field's own rules
    fn validate_value(&self, input: &str) -> Result<(), FieldValidationError>;

    /// Validate user input; empty input only passes for optional fields
    fn validate(&self, input: &str) -> Result<(), FieldValidationError> {
        let input = input.trim();

        if input.is_empty() {
            return if self.spec().required {
                Err(FieldValidationError::Required {
                    field: self.id().to_string(),
                })
            } else {
                Ok(())
            };
        }

        self.validate_value(input)
    }
}

fn render_line(field_type: &str, spec: &FieldSpec, details: &[String]) -> String {
    let mut line = format!("[{}] {}", field_type, spec.id);

    if let Some(placeholder) = &spec.placeholder {
        line.push_str(": ");
        line.push_str(placeholder);
    }

    let mut notes: Vec<String> = Vec::new();
    if spec.required {
        notes.push("required".to_string());
    }
    notes.extend(details.iter().cloned());

    if !notes.is_empty() {
        line.push_str(&format!(" ({})", notes.join(", ")));
    }

    line
}

fn length_note(spec: &FieldSpec) -> Option<String> {
    match (spec.min_length, spec.max_length) {
        (Some(min), Some(max)) => Some(format!("{}-{} characters", min, max)),
        (Some(min), None) => Some(format!("at least {} characters", min)),
        (None, Some(max)) => Some(format!("at most {} characters", max)),
        (None, None) => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsernameField {
    spec: FieldSpec,
}

impl UsernameField {
    pub const TYPE: &'static str = "username";

    pub fn new(spec: FieldSpec) -> Self {
        Self { spec }
    }
}

impl Product for UsernameField {
    fn tag(&self) -> &str {
        Self::TYPE
    }
}

impl FormField for UsernameField {
    fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    fn render(&self) -> String {
        let details: Vec<String> = length_note(&self.spec).into_iter().collect();
        render_line(Self::TYPE, &self.spec, &details)
    }

    fn validate_value(&self, input: &str) -> Result<(), FieldValidationError> {
        validate_length(self.id(), input, self.spec.min_length, self.spec.max_length)?;
        validate_username_characters(self.id(), input)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PasswordField {
    spec: FieldSpec,
}

impl PasswordField {
    pub const TYPE: &'static str = "password";

    pub fn new(spec: FieldSpec) -> Self {
        Self { spec }
    }
}

impl Product for PasswordField {
    fn tag(&self) -> &str {
        Self::TYPE
    }
}

impl FormField for PasswordField {
    fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    fn render(&self) -> String {
        let mut details: Vec<String> = length_note(&self.spec).into_iter().collect();
        details.push("masked".to_string());
        render_line(Self::TYPE, &self.spec, &details)
    }

    fn validate_value(&self, input: &str) -> Result<(), FieldValidationError> {
        validate_length(self.id(), input, self.spec.min_length, self.spec.max_length)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BirthdayField {
    spec: FieldSpec,
}

impl BirthdayField {
    pub const TYPE: &'static str = "birthday";

    pub fn new(spec: FieldSpec) -> Self {
        Self { spec }
    }
}

impl Product for BirthdayField {
    fn tag(&self) -> &str {
        Self::TYPE
    }
}

impl FormField for BirthdayField {
    fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    fn render(&self) -> String {
        let range = match (self.spec.min_date, self.spec.max_date) {
            (Some(min), Some(max)) => Some(format!("{} to {}", min, max)),
            (Some(min), None) => Some(format!("from {}", min)),
            (None, Some(max)) => Some(format!("until {}", max)),
            (None, None) => None,
        };
        let details: Vec<String> = range.into_iter().collect();
        render_line(Self::TYPE, &self.spec, &details)
    }

    fn validate_value(&self, input: &str) -> Result<(), FieldValidationError> {
        validate_date(self.id(), input, self.spec.min_date, self.spec.max_date).map(|_| ())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderField {
    spec: FieldSpec,
}

impl GenderField {
    pub const TYPE: &'static str = "gender";

    pub fn new(spec: FieldSpec) -> Self {
        Self { spec }
    }
}

impl Product for GenderField {
    fn tag(&self) -> &str {
        Self::TYPE
    }
}

impl FormField for GenderField {
    fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    fn render(&self) -> String {
        let details = if self.spec.options.is_empty() {
            Vec::new()
        } else {
            vec![format!("one of: {}", self.spec.options.join(" / "))]
        };
        render_line(Self::TYPE, &self.spec, &details)
    }

    fn validate_value(&self, input: &str) -> Result<(), FieldValidationError> {
        validate_option(self.id(), input, &self.spec.options)
    }
}
