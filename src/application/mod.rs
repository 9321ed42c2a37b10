//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and validation checks.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD with password hashing

pub mod services;
