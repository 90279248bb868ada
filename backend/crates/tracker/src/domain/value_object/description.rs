//! Exercise Description Value Object

use serde::Serialize;
use std::fmt;

/// Error returned when a description is missing or empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionError;

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "description is required")
    }
}

impl std::error::Error for DescriptionError {}

/// Free-text, non-empty description of an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    pub fn new(input: impl Into<String>) -> Result<Self, DescriptionError> {
        let input = input.into();
        if input.is_empty() {
            return Err(DescriptionError);
        }
        Ok(Self(input))
    }

    pub fn from_field(field: Option<String>) -> Result<Self, DescriptionError> {
        field.ok_or(DescriptionError).and_then(Self::new)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
