//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; presence checks
//! use `validator`.

pub mod health;
pub mod user;
