//! User management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::PasswordHasher;

/// Service for creating, reading, updating, and deleting users.
///
/// Passwords are hashed here, before any record reaches the repository.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    hasher: PasswordHasher,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>, hasher: PasswordHasher) -> Self {
        Self { repository, hasher }
    }

    /// Returns every user in insertion order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Hashes the password, stores the user, and returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already taken.
    pub async fn create_user(&self, mut new_user: NewUser) -> Result<String, AppError> {
        new_user.password = self.hasher.hash(&new_user.password)?;

        let id = self.repository.add(new_user).await?;
        tracing::info!(user_id = %id, "User created");

        Ok(id)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has that id.
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }

    /// Retrieves a user by email, if one exists.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.repository.find_by_email(email).await
    }

    /// Replaces every field of the user except its id.
    ///
    /// `user.password` is the raw password and is hashed before storing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has `user.id`.
    pub async fn replace_user(&self, mut user: User) -> Result<(), AppError> {
        user.password = self.hasher.hash(&user.password)?;

        let id = user.id.clone();
        self.repository.replace(user).await?;
        tracing::info!(user_id = %id, "User replaced");

        Ok(())
    }

    /// Applies the allow-listed fields of `patch` to the user.
    ///
    /// A password in the patch is hashed before storing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has that id.
    pub async fn patch_user(&self, id: &str, mut patch: UserPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            tracing::debug!(user_id = %id, "Patch carries no allow-listed fields");
        }

        if let Some(password) = patch.password.take() {
            patch.password = Some(self.hasher.hash(&password)?);
        }

        self.repository.patch(id, patch).await?;
        tracing::info!(user_id = %id, "User patched");

        Ok(())
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has that id.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        self.repository.remove(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }

    /// Number of stored users.
    pub async fn count_users(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
