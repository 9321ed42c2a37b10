//! Repository trait for user record access.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user records.
///
/// Records are kept in insertion order and every lookup is a linear scan.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user under a freshly generated id and returns that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a record with the same email exists.
    /// Returns [`AppError::Internal`] if no unused id could be generated.
    async fn add(&self, new_user: NewUser) -> Result<String, AppError>;

    /// Returns every record in insertion order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Finds a record by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Finds a record by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Replaces the record with `user.id` in place, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has that id.
    async fn replace(&self, user: User) -> Result<(), AppError>;

    /// Applies a partial update to the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has that id.
    async fn patch(&self, id: &str, patch: UserPatch) -> Result<(), AppError>;

    /// Removes the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has that id.
    async fn remove(&self, id: &str) -> Result<(), AppError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, AppError>;
}
