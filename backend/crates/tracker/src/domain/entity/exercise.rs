//! Exercise Entity
//!
//! One entry in a user's log. Entries are immutable once logged.

use crate::domain::value_object::{Description, ExerciseDate, Minutes};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub description: Description,
    pub duration: Minutes,
    pub date: ExerciseDate,
}

impl Exercise {
    pub fn new(description: Description, duration: Minutes, date: ExerciseDate) -> Self {
        Self {
            description,
            duration,
            date,
        }
    }
}
