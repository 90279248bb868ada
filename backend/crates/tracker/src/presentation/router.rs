//! Tracker Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::{ExerciseLogRepository, UserRepository};
use crate::infra::memory::InMemoryTrackerRepository;
use crate::presentation::handlers::{self, TrackerAppState};

/// Create the tracker router with the in-memory repository
pub fn tracker_router(repo: InMemoryTrackerRepository) -> Router {
    tracker_router_generic(repo)
}

/// Create a tracker router for any repository implementation
///
/// Routes are relative; mount under `/api`.
pub fn tracker_router_generic<R>(repo: R) -> Router
where
    R: UserRepository + ExerciseLogRepository + Clone + Send + Sync + 'static,
{
    let state = TrackerAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/hello", get(handlers::hello))
        .route(
            "/users",
            post(handlers::create_user::<R>).get(handlers::list_users::<R>),
        )
        .route("/users/{id}/exercises", post(handlers::add_exercise::<R>))
        .route("/users/{id}/logs", get(handlers::get_log::<R>))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}
