//! Presentation Layer
//!
//! HTTP handlers, DTOs and the request body extractor.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;
