#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Opaque employee identifier.
///
/// Assigned once by the store when a record is created and never reassigned.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidEmployeeId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build an identifier from a millisecond timestamp and random suffix bytes.
    ///
    /// The timestamp is rendered in base 36 followed by the suffix as lowercase hex.
    pub fn from_parts(timestamp_millis: u64, suffix: &[u8]) -> Self {
        Self(format!("{}{}", to_base36(timestamp_millis), hex::encode(suffix)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for EmployeeId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
