//! List Users Use Case

use std::sync::Arc;

use crate::domain::entity::UserSummary;
use crate::domain::repository::UserRepository;
use crate::error::TrackerResult;

pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> TrackerResult<Vec<UserSummary>> {
        self.user_repo.list().await
    }
}
