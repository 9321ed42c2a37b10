//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::persistence::InMemoryUserRepository;
use crate::utils::password::PasswordHasher;

/// Concrete user service used by the HTTP layer.
pub type AppUserService = UserService<InMemoryUserRepository>;

/// State shared by every request.
///
/// Cloning is cheap: the service sits behind an `Arc`, so all clones see the
/// same store.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
    /// Address the server listens on, reported by the root endpoint.
    pub listen_addr: String,
    /// Maximum request body size buffered by the validation chain.
    pub body_limit: usize,
}

impl AppState {
    /// Wires a fresh, empty store into a new state.
    pub fn new(hasher: PasswordHasher, listen_addr: String, body_limit: usize) -> Self {
        let repository = Arc::new(InMemoryUserRepository::new());
        let user_service = Arc::new(UserService::new(repository, hasher));

        Self {
            user_service,
            listen_addr,
            body_limit,
        }
    }
}
