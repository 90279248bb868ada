//! Common ID Types
//!
//! Type-safe sequential ID wrappers for domain entities.
//! IDs are allocated by an [`IdSequence`] owned by whoever stores the
//! entities, start at 1 and are never reused.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, IdSequence, markers};
/// type UserId = Id<markers::User>;
///
/// let mut seq = IdSequence::<markers::User>::new();
/// let first: UserId = seq.next_id();
/// assert_eq!(first.to_string(), "1");
/// ```
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<T>,
}

/// Error returned when a path segment is not a valid ID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id: {input:?}")]
pub struct IdParseError {
    pub input: String,
}

impl<T> Id<T> {
    /// Create from a raw value
    pub const fn from_raw(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value
    pub const fn value(&self) -> u64 {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdParseError;

    /// Only plain decimal digits are accepted (no sign, no whitespace).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdParseError {
                input: s.to_string(),
            });
        }
        s.parse::<u64>()
            .map(Self::from_raw)
            .map_err(|_| IdParseError {
                input: s.to_string(),
            })
    }
}

/// IDs go over the wire as strings (`"1"`), never as numbers.
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Monotonic ID allocator
///
/// Not thread-safe on its own; keep it behind the same guard as the
/// collection it allocates IDs for.
pub struct IdSequence<T> {
    next: u64,
    _marker: PhantomData<T>,
}

impl<T> IdSequence<T> {
    /// Create a sequence whose first ID is 1
    pub const fn new() -> Self {
        Self {
            next: 1,
            _marker: PhantomData,
        }
    }

    /// Allocate the next ID
    pub fn next_id(&mut self) -> Id<T> {
        let id = Id::from_raw(self.next);
        self.next += 1;
        id
    }
}

impl<T> Default for IdSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IdSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdSequence").field("next", &self.next).finish()
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut seq = IdSequence::<markers::User>::new();
        let a = seq.next_id();
        let b = seq.next_id();
        let c = seq.next_id();

        assert_eq!(a.value(), 1);
        assert_eq!(b.value(), 2);
        assert_eq!(c.value(), 3);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_id_from_str() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id, UserId::from_raw(42));

        assert!("".parse::<UserId>().is_err());
        assert!("abc".parse::<UserId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
        assert!("+1".parse::<UserId>().is_err());
        assert!(" 1".parse::<UserId>().is_err());
        assert!("99999999999999999999999".parse::<UserId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = UserId::from_raw(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""7""#);
        assert_eq!(id.to_string(), "7");
    }
}
