//! Department enumeration.
//!
//! Departments are a closed set. They are stored and displayed by their
//! canonical name (`"HR"`, `"Engineering"`, ...) and double as the grouping
//! key for roster statistics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Sales,
    Marketing,
    Finance,
    Operations,
    Product,
    Design,
}

impl Department {
    /// Every department, in declaration order.
    pub const ALL: [Department; 8] = [
        Department::Hr,
        Department::Engineering,
        Department::Sales,
        Department::Marketing,
        Department::Finance,
        Department::Operations,
        Department::Product,
        Department::Design,
    ];

    /// Returns the canonical name used for storage, CSV, and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Engineering => "Engineering",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::Product => "Product",
            Department::Design => "Design",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Department {
    type Err = ModelError;

    /// Parse a department name (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Department::ALL
            .into_iter()
            .find(|dept| dept.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ModelError::UnknownDepartment(s.to_string()))
    }
}
