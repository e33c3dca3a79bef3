//! Employee entity and roles

use serde::{Deserialize, Serialize};

use crate::domain::registry::Product;

/// Kind of employee; each role is a separate product variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRole {
    Developer,
    Tester,
    Designer,
}

impl EmployeeRole {
    pub const ALL: [EmployeeRole; 3] = [Self::Developer, Self::Tester, Self::Designer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Tester => "Tester",
            Self::Designer => "Designer",
        }
    }

    /// Numeric code the role is registered under
    pub fn code(&self) -> i64 {
        match self {
            Self::Developer => 1,
            Self::Tester => 2,
            Self::Designer => 3,
        }
    }
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An employee of one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    #[serde(rename = "type")]
    role: EmployeeRole,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: EmployeeRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> EmployeeRole {
        self.role
    }

    pub fn greeting(&self) -> String {
        format!("Hi, I am {} and I am a {}", self.name, self.role)
    }
}

impl Product for Employee {
    fn tag(&self) -> &str {
        self.role.as_str()
    }
}
