//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Random record identifiers
//! - [`password`] - Salted password hashing

pub mod id_generator;
pub mod password;
