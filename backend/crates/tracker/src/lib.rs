//! Exercise Tracker Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, log filtering, repository traits
//! - `application/` - Use cases
//! - `infra/` - In-memory registry
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Error contract
//! - Missing or malformed required input: 400 with `{"error": ...}`
//! - Unknown user id or unparseable exercise date: 200 with `{"error": ...}`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TrackerError, TrackerResult};
pub use infra::memory::InMemoryTrackerRepository;
pub use presentation::router::{tracker_router, tracker_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
