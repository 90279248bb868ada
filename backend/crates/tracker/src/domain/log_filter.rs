//! Log Filter
//!
//! Date-range and limit filtering over a user's exercise log.
//! Query values that fail to parse are dropped, never reported.

use std::num::NonZeroUsize;

use crate::domain::entity::Exercise;
use crate::domain::value_object::ExerciseDate;

/// Filter applied to a log, in field order: `from`, then `to`, then `limit`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Inclusive lower bound
    pub from: Option<ExerciseDate>,
    /// Inclusive upper bound
    pub to: Option<ExerciseDate>,
    /// Keep at most this many entries, in log order
    pub limit: Option<NonZeroUsize>,
}

impl LogFilter {
    /// Build a filter from raw query values
    pub fn from_query(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            from: ExerciseDate::parse_lenient(from),
            to: ExerciseDate::parse_lenient(to),
            limit: limit.and_then(|raw| raw.trim().parse::<NonZeroUsize>().ok()),
        }
    }

    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.from.is_none_or(|from| exercise.date >= from)
            && self.to.is_none_or(|to| exercise.date <= to)
    }

    pub fn apply<'a>(&self, log: &'a [Exercise]) -> Vec<&'a Exercise> {
        let cap = self.limit.map_or(usize::MAX, NonZeroUsize::get);
        log.iter().filter(|e| self.matches(e)).take(cap).collect()
    }
}
