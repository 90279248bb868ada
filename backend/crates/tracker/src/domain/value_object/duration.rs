//! Exercise Duration Value Object
//!
//! Whole minutes. The wire value may arrive as a form string (`"30"`)
//! or a JSON number; either way it must be an integer.

use serde::Serialize;
use std::fmt;

/// Error returned when a duration is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// Field absent or empty
    Missing,
    /// Field present but not an integer
    NotAnInteger { input: String },
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "duration is required"),
            Self::NotAnInteger { .. } => write!(f, "duration must be an integer"),
        }
    }
}

impl std::error::Error for DurationError {}

/// Duration of an exercise in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Minutes(i64);

impl Minutes {
    pub const fn new(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Parse a raw request value
    ///
    /// Surrounding whitespace is ignored; `"30"` and `"-5"` are accepted,
    /// `"30.5"` and `"thirty"` are not.
    pub fn parse(input: &str) -> Result<Self, DurationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DurationError::Missing);
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DurationError::NotAnInteger {
                input: input.to_string(),
            })
    }

    pub fn from_field(field: Option<&str>) -> Result<Self, DurationError> {
        field.ok_or(DurationError::Missing).and_then(Self::parse)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
