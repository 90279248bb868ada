//! Create User Use Case

use std::sync::Arc;

use crate::domain::entity::UserSummary;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Username;
use crate::error::TrackerResult;

/// Create user input
pub struct CreateUserInput {
    pub username: Option<String>,
}

/// Create user use case
pub struct CreateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CreateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: CreateUserInput) -> TrackerResult<UserSummary> {
        let username = Username::from_field(input.username)?;

        let user = self.user_repo.create(username).await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User created"
        );

        Ok(user.summary())
    }
}
