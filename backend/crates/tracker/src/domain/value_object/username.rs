//! Username Value Object
//!
//! A display name chosen by the client.
//!
//! ## 設計方針
//! - 入力をそのまま保持する（trim・正規化・小文字化はしない）
//! - 一意性は求めない。ユーザーの識別は `UserId` のみで行う
//!
//! ## 不変条件
//! - 空文字列ではない
//! - 長さ・文字種の制限なし

use serde::Serialize;
use std::fmt;

/// Error returned when a username is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Field absent from the request
    Missing,
    /// Field present but empty
    Empty,
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing | Self::Empty => write!(f, "username is required"),
        }
    }
}

impl std::error::Error for UsernameError {}

/// Non-empty username, stored exactly as submitted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(input: impl Into<String>) -> Result<Self, UsernameError> {
        let input = input.into();
        if input.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(input))
    }

    /// Validate an optional request field
    pub fn from_field(field: Option<String>) -> Result<Self, UsernameError> {
        field.ok_or(UsernameError::Missing).and_then(Self::new)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
