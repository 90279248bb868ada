//! Add Exercise Use Case
//!
//! Checks run in this order: user lookup, description, duration, date.
//! Nothing is stored unless every check passes.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::parse_user_id;
use crate::domain::entity::Exercise;
use crate::domain::repository::{ExerciseLogRepository, UserRepository};
use crate::domain::value_object::{Description, ExerciseDate, Minutes, Username};
use crate::error::{TrackerError, TrackerResult};

/// Add exercise input (raw request values)
pub struct AddExerciseInput {
    pub user_id: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Add exercise output
#[derive(Debug, Clone)]
pub struct AddExerciseOutput {
    pub user_id: UserId,
    pub username: Username,
    pub exercise: Exercise,
}

/// Add exercise use case
pub struct AddExerciseUseCase<U, L>
where
    U: UserRepository,
    L: ExerciseLogRepository,
{
    user_repo: Arc<U>,
    log_repo: Arc<L>,
}

impl<U, L> AddExerciseUseCase<U, L>
where
    U: UserRepository,
    L: ExerciseLogRepository,
{
    pub fn new(user_repo: Arc<U>, log_repo: Arc<L>) -> Self {
        Self {
            user_repo,
            log_repo,
        }
    }

    pub async fn execute(&self, input: AddExerciseInput) -> TrackerResult<AddExerciseOutput> {
        let user_id = parse_user_id(&input.user_id)?;
        if self.user_repo.find(user_id).await?.is_none() {
            return Err(TrackerError::UserNotFound);
        }

        let description = Description::from_field(input.description)?;
        let duration = Minutes::from_field(input.duration.as_deref())?;
        let date = ExerciseDate::resolve(input.date.as_deref())?;

        let exercise = Exercise::new(description, duration, date);

        let owner = self
            .log_repo
            .append(user_id, exercise.clone())
            .await?
            .ok_or(TrackerError::UserNotFound)?;

        tracing::info!(
            user_id = %owner.id,
            duration = exercise.duration.get(),
            date = %exercise.date,
            "Exercise logged"
        );

        Ok(AddExerciseOutput {
            user_id: owner.id,
            username: owner.username,
            exercise,
        })
    }
}
