//! API DTOs (Data Transfer Objects)
//!
//! Request fields are all optional at this level: presence and type
//! checks belong to the value objects, so that a missing field becomes
//! a `{"error": ...}` body instead of a deserialization rejection.

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{AddExerciseOutput, GetLogOutput};
use crate::domain::entity::{Exercise, UserSummary};
use crate::domain::value_object::{Description, ExerciseDate, Minutes, Username};
use kernel::id::UserId;

// ============================================================================
// Hello
// ============================================================================

/// Response for GET /api/hello
#[derive(Debug, Clone, Serialize)]
pub struct HelloResponse {
    pub greeting: &'static str,
}

// ============================================================================
// Users
// ============================================================================

/// Request for POST /api/users
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub username: Option<String>,
}

/// One user in POST/GET /api/users responses
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: Username,
    pub id: UserId,
}

impl From<UserSummary> for UserResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

// ============================================================================
// Exercises
// ============================================================================

/// Request for POST /api/users/{id}/exercises
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub description: Option<String>,
    /// Form string or JSON number
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub date: Option<String>,
}

/// Response for POST /api/users/{id}/exercises
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseResponse {
    pub username: Username,
    pub description: Description,
    pub duration: Minutes,
    pub date: ExerciseDate,
    pub id: UserId,
}

impl From<AddExerciseOutput> for ExerciseResponse {
    fn from(output: AddExerciseOutput) -> Self {
        Self {
            username: output.username,
            description: output.exercise.description,
            duration: output.exercise.duration,
            date: output.exercise.date,
            id: output.user_id,
        }
    }
}

// ============================================================================
// Logs
// ============================================================================

/// Query for GET /api/users/{id}/logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    /// Build from decoded query pairs. A repeated key keeps its first
    /// value and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "from" => &mut query.from,
                "to" => &mut query.to,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// One entry of a log response
#[derive(Debug, Clone, Serialize)]
pub struct LogEntryResponse {
    pub description: Description,
    pub duration: Minutes,
    pub date: ExerciseDate,
}

impl From<Exercise> for LogEntryResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

/// Response for GET /api/users/{id}/logs
#[derive(Debug, Clone, Serialize)]
pub struct LogResponse {
    pub username: Username,
    pub count: usize,
    pub id: UserId,
    pub log: Vec<LogEntryResponse>,
}

impl From<GetLogOutput> for LogResponse {
    fn from(output: GetLogOutput) -> Self {
        let count = output.count();
        Self {
            username: output.username,
            count,
            id: output.user_id,
            log: output.log.into_iter().map(LogEntryResponse::from).collect(),
        }
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Raw scalar as sent by a form (always text) or JSON (text or number)
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Accept any scalar and keep its textual form; `null` is treated as absent.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        // `{:?}` keeps the fraction (`30.0`), so only JSON integers pass as minutes
        Scalar::Float(n) => format!("{n:?}"),
        Scalar::Bool(b) => b.to_string(),
    }))
}
