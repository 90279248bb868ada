//! Domain Value Objects
//!
//! Validated request values. Each one owns its error type; use cases
//! translate those into `TrackerError`.

pub mod description;
pub mod duration;
pub mod exercise_date;
pub mod username;

pub use description::{Description, DescriptionError};
pub use duration::{DurationError, Minutes};
pub use exercise_date::{DateParseError, ExerciseDate};
pub use username::{Username, UsernameError};
