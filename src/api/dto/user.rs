//! DTOs for the user endpoints.
//!
//! All request and response bodies use camelCase keys.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserPatch};

/// Presence check over a create or full-update body.
///
/// Only presence is checked; the values themselves are not inspected.
#[derive(Debug, Deserialize, Validate)]
pub struct RequiredUserFields {
    #[validate(required(message = "Missing required field email"))]
    pub email: Option<String>,

    #[validate(required(message = "Missing required field password"))]
    pub password: Option<String>,
}

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_level: Option<i32>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            permission_level: req.permission_level,
        }
    }
}

/// Request body for `PUT /users/{id}`.
///
/// The complete record minus the id, which comes from the path. Optional
/// fields left out of the body are cleared.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_level: Option<i32>,
}

impl ReplaceUserRequest {
    /// Builds the replacement record for `id`. The password is still raw.
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            permission_level: self.permission_level,
        }
    }
}

/// Request body for `PATCH /users/{id}`.
///
/// Keys outside the patch allow-list (such as `id`) are ignored. `email` is
/// accepted only so the email check can compare it; it is never written.
///
/// # Optional field semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the value
/// - **Value** → set the value
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    pub email: Option<String>,

    pub password: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub first_name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub last_name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub permission_level: Option<Option<i32>>,
}

impl From<PatchUserRequest> for UserPatch {
    fn from(req: PatchUserRequest) -> Self {
        Self {
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            permission_level: req.permission_level,
        }
    }
}

/// Response body for `POST /users`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// A user as returned by the API. The password hash is never exposed.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_level: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            permission_level: user.permission_level,
        }
    }
}
