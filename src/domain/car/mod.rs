//! Car model domain module
//!
//! Car models are keyed by their designation, `<make>-<model>` (e.g.
//! "Mercedes-C200"), which is also the product tag.

use serde::{Deserialize, Serialize};

use crate::domain::registry::Product;

/// A specific car model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    designation: String,
    make: String,
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl CarModel {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        let make = make.into();
        let model = model.into();

        Self {
            designation: designation(&make, &model),
            make,
            model,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

impl Product for CarModel {
    fn tag(&self) -> &str {
        &self.designation
    }
}

pub fn designation(make: &str, model: &str) -> String {
    format!("{}-{}", make, model)
}
