//! Exercise Date Value Object
//!
//! A calendar date with no time-of-day. Accepted inputs:
//! - `yyyy-mm-dd` (e.g. `1990-01-01`)
//! - RFC 3339 timestamps (e.g. `1990-01-01T08:30:00Z`), keeping the date
//!   as written in the timestamp's own offset
//!
//! Rendered as `Mon Jan 01 1990`.
//!
//! ## 設計方針
//! - 時刻は持たない。タイムスタンプ入力はそのオフセットでの暦日を採用
//! - 「今日」は UTC 基準（サーバーのローカルタイムゾーンに依存しない）
//! - 範囲フィルタは暦日の比較のみで行う

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Output format: weekday, month, zero-padded day, four-digit year
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned when a date string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub input: String,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid Date")
    }
}

impl std::error::Error for DateParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Current date (UTC)
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let trimmed = input.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(timestamp.date_naive()));
        }
        Err(DateParseError {
            input: input.to_string(),
        })
    }

    /// Resolve an optional request field: absent or empty means today.
    pub fn resolve(field: Option<&str>) -> Result<Self, DateParseError> {
        match field.map(str::trim) {
            None | Some("") => Ok(Self::today()),
            Some(raw) => Self::parse(raw),
        }
    }

    /// Lenient variant for query bounds: anything unparseable is `None`.
    pub fn parse_lenient(field: Option<&str>) -> Option<Self> {
        field.and_then(|raw| Self::parse(raw).ok())
    }
}

impl FromStr for ExerciseDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl Serialize for ExerciseDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
