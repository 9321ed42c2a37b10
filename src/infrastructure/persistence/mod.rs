//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryUserRepository`] - User records kept in process memory

pub mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
