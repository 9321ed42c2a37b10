//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//! Repository traits are implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
