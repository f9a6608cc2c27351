//! Domain and response models for the book service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod book;
pub mod responses;

// Re-export commonly used types
pub use book::Book;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
