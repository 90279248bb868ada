//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (User, Exercise)
//! - Domain value objects (Username, Description, Minutes, ExerciseDate)
//! - Log filtering
//! - Repository traits (interfaces)

pub mod entity;
pub mod log_filter;
pub mod repository;
pub mod value_object;
