//! Discriminator values used to select a product variant

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Value identifying which product variant a registry should build.
///
/// Integer and string discriminators never compare equal to each other, so
/// `1` and `"1"` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Discriminator {
    Int(i64),
    Str(String),
}

impl Discriminator {
    pub fn int(value: i64) -> Self {
        Self::Int(value)
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Text that is the canonical form of a signed integer becomes `Int`,
/// anything else `Str`. `"007"` and `"+5"` stay strings.
impl FromStr for Discriminator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(v) if v.to_string() == s => Self::Int(v),
            _ => Self::Str(s.to_string()),
        })
    }
}

impl From<i64> for Discriminator {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Discriminator {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Discriminator {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Discriminator {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Discriminator {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Discriminator {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}
