//! In-process implementation of the user repository.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// Attempts at generating an id that is not already taken.
const MAX_ID_ATTEMPTS: usize = 10;

/// User store holding records in a `Vec` behind a read-write lock.
///
/// Records keep their insertion order. Lookups are linear scans. Mutations
/// take the write lock for the whole scan-and-splice, so concurrent callers
/// never observe a half-applied change.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn unused_id(users: &[User]) -> Result<String, AppError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_id()?;

            if !users.iter().any(|u| u.id == id) {
                return Ok(id);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique id",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, new_user: NewUser) -> Result<String, AppError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::bad_request(
                "User email already exists",
                json!({ "email": new_user.email }),
            ));
        }

        let id = Self::unused_id(&users)?;
        users.push(User::from_new(id.clone(), new_user));

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn replace(&self, user: User) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| AppError::user_not_found(&user.id))?;
        *slot = user;

        Ok(())
    }

    async fn patch(&self, id: &str, patch: UserPatch) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::user_not_found(id))?;
        user.apply_patch(patch);

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::user_not_found(id))?;
        users.remove(index);

        Ok(())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.users.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "hash".to_string(),
            first_name: None,
            last_name: None,
            permission_level: None,
        }
    }

    #[tokio::test]
    async fn test_add_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();

        let first = repo.add(new_user("a@x.com")).await.unwrap();
        let second = repo.add(new_user("b@x.com")).await.unwrap();

        let ids: Vec<_> = repo.list().await.unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.add(new_user("a@x.com")).await.unwrap();

        let result = repo.add(new_user("a@x.com")).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unused_id_skips_taken_ids() {
        let repo = InMemoryUserRepository::new();
        for i in 0..50 {
            repo.add(new_user(&format!("{i}@x.com"))).await.unwrap();
        }

        let users = repo.users.read().await;
        let id = InMemoryUserRepository::unused_id(&users).unwrap();
        assert!(!users.iter().any(|u| u.id == id));
    }

    #[tokio::test]
    async fn test_patch_unknown_id_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let result = repo.patch("missing", UserPatch::default()).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
