//! User Entity

use kernel::id::UserId;

use crate::domain::entity::exercise::Exercise;
use crate::domain::value_object::Username;

/// User with their full exercise log
///
/// # Invariants
/// - `id` is assigned by the registry and never changes
/// - `log` is append-only and keeps insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    log: Vec<Exercise>,
}

impl User {
    /// Create a user with an empty log
    pub fn new(id: UserId, username: Username) -> Self {
        Self {
            id,
            username,
            log: Vec::new(),
        }
    }

    pub fn log(&self) -> &[Exercise] {
        &self.log
    }

    pub fn record(&mut self, exercise: Exercise) {
        self.log.push(exercise);
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// User without the log, as returned by listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub username: Username,
}
