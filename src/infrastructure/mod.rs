//! Infrastructure layer for storage.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;
