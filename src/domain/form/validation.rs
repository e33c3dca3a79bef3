//! Form input validation utilities

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Date format accepted by date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Regex pattern for valid usernames (letters, digits, '.', '_', '-')
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("username pattern is valid"));

/// Field input validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValidationError {
    /// Required field left empty
    Required { field: String },
    /// Input shorter than the minimum length
    TooShort { field: String, length: usize, min: usize },
    /// Input longer than the maximum length
    TooLong { field: String, length: usize, max: usize },
    /// Input contains characters the field does not allow
    InvalidCharacters { field: String },
    /// Input is not a date in `YYYY-MM-DD` form
    InvalidDate { field: String, value: String },
    /// Date outside the allowed range
    DateOutOfRange {
        field: String,
        value: NaiveDate,
        min: Option<NaiveDate>,
        max: Option<NaiveDate>,
    },
    /// Input is not one of the offered options
    NotAnOption { field: String, value: String },
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "Field '{}' is required", field),
            Self::TooShort { field, length, min } => write!(
                f,
                "Field '{}' is too short: {} characters (min {})",
                field, length, min
            ),
            Self::TooLong { field, length, max } => write!(
                f,
                "Field '{}' is too long: {} characters (max {})",
                field, length, max
            ),
            Self::InvalidCharacters { field } => write!(
                f,
                "Field '{}' may only contain letters, digits, '.', '_' and '-'",
                field
            ),
            Self::InvalidDate { field, value } => write!(
                f,
                "Field '{}' has invalid date '{}': expected YYYY-MM-DD",
                field, value
            ),
            Self::DateOutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "Field '{}' date {} is out of range", field, value)?;
                match (min, max) {
                    (Some(min), Some(max)) => write!(f, " ({} to {})", min, max),
                    (Some(min), None) => write!(f, " (from {})", min),
                    (None, Some(max)) => write!(f, " (until {})", max),
                    (None, None) => Ok(()),
                }
            }
            Self::NotAnOption { field, value } => {
                write!(f, "Field '{}' does not offer option '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for FieldValidationError {}

/// Check character length against optional bounds
pub fn validate_length(
    field: &str,
    input: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), FieldValidationError> {
    let length = input.chars().count();

    if let Some(min) = min.filter(|min| length < *min) {
        return Err(FieldValidationError::TooShort {
            field: field.to_string(),
            length,
            min,
        });
    }

    if let Some(max) = max.filter(|max| length > *max) {
        return Err(FieldValidationError::TooLong {
            field: field.to_string(),
            length,
            max,
        });
    }

    Ok(())
}

pub fn validate_username_characters(field: &str, input: &str) -> Result<(), FieldValidationError> {
    if USERNAME_PATTERN.is_match(input) {
        Ok(())
    } else {
        Err(FieldValidationError::InvalidCharacters {
            field: field.to_string(),
        })
    }
}

/// Parse a date and check it against optional bounds (inclusive)
pub fn validate_date(
    field: &str,
    input: &str,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> Result<NaiveDate, FieldValidationError> {
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        FieldValidationError::InvalidDate {
            field: field.to_string(),
            value: input.to_string(),
        }
    })?;

    let too_early = min.is_some_and(|min| date < min);
    let too_late = max.is_some_and(|max| date > max);

    if too_early || too_late {
        return Err(FieldValidationError::DateOutOfRange {
            field: field.to_string(),
            value: date,
            min,
            max,
        });
    }

    Ok(date)
}

pub fn validate_option(
    field: &str,
    input: &str,
    options: &[String],
) -> Result<(), FieldValidationError> {
    if options.iter().any(|option| option == input) {
        Ok(())
    } else {
        Err(FieldValidationError::NotAnOption {
            field: field.to_string(),
            value: input.to_string(),
        })
    }
}
