//! Repository Traits
//!
//! Interfaces for the user registry. Implementations live in the
//! infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{Exercise, User, UserSummary};
use crate::domain::value_object::Username;
use crate::error::TrackerResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Allocate a fresh id and store a user with an empty log
    async fn create(&self, username: Username) -> TrackerResult<User>;

    /// All users in creation order, without logs
    async fn list(&self) -> TrackerResult<Vec<UserSummary>>;

    /// Get a user (with log) by id
    async fn find(&self, user_id: UserId) -> TrackerResult<Option<User>>;
}

/// Exercise log repository trait
#[trait_variant::make(ExerciseLogRepository: Send)]
pub trait LocalExerciseLogRepository {
    /// Append an exercise to a user's log
    ///
    /// Returns `None` (and stores nothing) when the user does not exist.
    async fn append(
        &self,
        user_id: UserId,
        exercise: Exercise,
    ) -> TrackerResult<Option<UserSummary>>;
}
