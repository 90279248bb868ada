//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::application::{
    AddExerciseInput, AddExerciseUseCase, CreateUserInput, CreateUserUseCase, GetLogInput,
    GetLogUseCase, ListUsersUseCase,
};
use crate::domain::repository::{ExerciseLogRepository, UserRepository};
use crate::error::TrackerResult;
use kernel::error::app_error::AppError;
use crate::presentation::dto::{
    AddExerciseRequest, CreateUserRequest, ExerciseResponse, HelloResponse, LogQuery,
    LogResponse, UserResponse,
};
use crate::presentation::extract::Payload;

/// Shared state for tracker handlers
#[derive(Clone)]
pub struct TrackerAppState<R>
where
    R: UserRepository + ExerciseLogRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/hello
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        greeting: "hello API",
    })
}

/// POST /api/users
pub async fn create_user<R>(
    State(state): State<TrackerAppState<R>>,
    Payload(req): Payload<CreateUserRequest>,
) -> TrackerResult<Json<UserResponse>>
where
    R: UserRepository + ExerciseLogRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateUserUseCase::new(state.repo.clone());

    let user = use_case
        .execute(CreateUserInput {
            username: req.username,
        })
        .await?;

    Ok(Json(user.into()))
}

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<TrackerAppState<R>>,
) -> TrackerResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + ExerciseLogRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());

    let users = use_case.execute().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/users/{id}/exercises
pub async fn add_exercise<R>(
    State(state): State<TrackerAppState<R>>,
    Path(user_id): Path<String>,
    Payload(req): Payload<AddExerciseRequest>,
) -> TrackerResult<Json<ExerciseResponse>>
where
    R: UserRepository + ExerciseLogRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddExerciseUseCase::new(state.repo.clone(), state.repo.clone());

    let input = AddExerciseInput {
        user_id,
        description: req.description,
        duration: req.duration,
        date: req.date,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(output.into()))
}

/// GET /api/users/{id}/logs
pub async fn get_log<R>(
    State(state): State<TrackerAppState<R>>,
    Path(user_id): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> TrackerResult<Json<LogResponse>>
where
    R: UserRepository + ExerciseLogRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetLogUseCase::new(state.repo.clone());

    // Bounds are optional filters; an undecodable query string is no filter at all
    let query = match query {
        Ok(Query(pairs)) => LogQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring undecodable log query");
            LogQuery::default()
        }
    };

    let input = GetLogInput {
        user_id,
        from: query.from,
        to: query.to,
        limit: query.limit,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(output.into()))
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("Method Not Allowed")
}
