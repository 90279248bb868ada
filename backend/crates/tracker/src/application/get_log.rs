//! Get Log Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::parse_user_id;
use crate::domain::entity::Exercise;
use crate::domain::log_filter::LogFilter;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Username;
use crate::error::{TrackerError, TrackerResult};

/// Get log input (raw request values)
pub struct GetLogInput {
    pub user_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Get log output
#[derive(Debug, Clone)]
pub struct GetLogOutput {
    pub user_id: UserId,
    pub username: Username,
    /// Filtered and truncated entries
    pub log: Vec<Exercise>,
}

impl GetLogOutput {
    /// Size of the returned log, not of the full one
    pub fn count(&self) -> usize {
        self.log.len()
    }
}

pub struct GetLogUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetLogUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: GetLogInput) -> TrackerResult<GetLogOutput> {
        let user_id = parse_user_id(&input.user_id)?;
        let user = self
            .user_repo
            .find(user_id)
            .await?
            .ok_or(TrackerError::UserNotFound)?;

        let filter = LogFilter::from_query(
            input.from.as_deref(),
            input.to.as_deref(),
            input.limit.as_deref(),
        );
        let log: Vec<Exercise> = filter.apply(user.log()).into_iter().cloned().collect();

        tracing::debug!(
            user_id = %user.id,
            total = user.log().len(),
            returned = log.len(),
            "Log queried"
        );

        Ok(GetLogOutput {
            user_id: user.id,
            username: user.username,
            log,
        })
    }
}
