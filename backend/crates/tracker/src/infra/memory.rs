//! In-Memory Repository Implementation
//!
//! Process-local registry. Everything is lost on restart.
//!
//! ## 不変条件
//! - ID 採番と挿入は同じ書き込みロック内で行う（同時作成でも重複・欠番なし）
//! - ID は再利用しない
//! - 追記済みのエクササイズは変更・削除しない

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::{IdSequence, UserId, markers};
use tokio::sync::RwLock;

use crate::domain::entity::{Exercise, User, UserSummary};
use crate::domain::repository::{ExerciseLogRepository, UserRepository};
use crate::domain::value_object::Username;
use crate::error::TrackerResult;

/// Registry state, only ever touched under the repository lock
#[derive(Debug, Default)]
struct Registry {
    ids: IdSequence<markers::User>,
    // Ids are allocated in increasing order, so key order is creation order.
    users: BTreeMap<UserId, User>,
}

/// In-memory repository; clones share the same registry
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrackerRepository {
    registry: Arc<RwLock<Registry>>,
}

impl InMemoryTrackerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub async fn user_count(&self) -> usize {
        self.registry.read().await.users.len()
    }
}

impl UserRepository for InMemoryTrackerRepository {
    async fn create(&self, username: Username) -> TrackerResult<User> {
        let mut registry = self.registry.write().await;
        let id = registry.ids.next_id();
        let user = User::new(id, username);
        registry.users.insert(id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> TrackerResult<Vec<UserSummary>> {
        let registry = self.registry.read().await;
        Ok(registry.users.values().map(User::summary).collect())
    }

    async fn find(&self, user_id: UserId) -> TrackerResult<Option<User>> {
        let registry = self.registry.read().await;
        Ok(registry.users.get(&user_id).cloned())
    }
}

impl ExerciseLogRepository for InMemoryTrackerRepository {
    async fn append(
        &self,
        user_id: UserId,
        exercise: Exercise,
    ) -> TrackerResult<Option<UserSummary>> {
        let mut registry = self.registry.write().await;
        Ok(registry.users.get_mut(&user_id).map(|user| {
            user.record(exercise);
            user.summary()
        }))
    }
}
