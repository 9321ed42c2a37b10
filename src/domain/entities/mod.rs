//! Core domain entities.
//!
//! Entities are plain data structures. Following the "New Type" pattern, each
//! stored entity has separate shapes for creation and partial updates:
//!
//! - [`User`] - A stored user record
//! - [`NewUser`] - Input for creating a user
//! - [`UserPatch`] - Partial update; its fields form the patch allow-list

pub mod user;

pub use user::{NewUser, User, UserPatch};
