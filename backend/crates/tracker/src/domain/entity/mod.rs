//! Domain Entities

pub mod exercise;
pub mod user;

pub use exercise::Exercise;
pub use user::{User, UserSummary};
