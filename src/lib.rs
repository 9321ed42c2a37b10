//! # User API
//!
//! A small REST API for user records built with Axum and an in-memory store.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - User entity and repository trait
//! - **Application Layer** ([`application`]) - User service, password hashing
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//! - **API Layer** ([`api`]) - Route table, validation chain, handlers, DTOs
//!
//! ## Request Flow
//!
//! ```text
//! route table row ─▶ validation checks (short-circuit) ─▶ handler ─▶ UserService ─▶ UserRepository
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export PASSWORD_SECRET="change-me"
//! cargo run
//! curl -X POST localhost:3000/users -H 'content-type: application/json' \
//!      -d '{"email":"a@x.com","password":"p"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{NewUser, User, UserPatch};
    pub use crate::domain::repositories::UserRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUserRepository;
    pub use crate::state::AppState;
    pub use crate::utils::password::PasswordHasher;
}
