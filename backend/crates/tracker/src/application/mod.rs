//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and the repositories.

pub mod add_exercise;
pub mod create_user;
pub mod get_log;
pub mod list_users;

pub use add_exercise::{AddExerciseInput, AddExerciseOutput, AddExerciseUseCase};
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use get_log::{GetLogInput, GetLogOutput, GetLogUseCase};
pub use list_users::ListUsersUseCase;

use kernel::id::UserId;

use crate::error::{TrackerError, TrackerResult};

/// Parse a path-supplied user id; anything that is not an issued id
/// shape is reported the same way as an unknown id.
pub(crate) fn parse_user_id(raw: &str) -> TrackerResult<UserId> {
    raw.parse().map_err(|_| TrackerError::UserNotFound)
}
