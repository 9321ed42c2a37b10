//! User entity and its creation and patch shapes.

/// A stored user record.
///
/// `password` always holds a hash produced by
/// [`crate::utils::password::PasswordHasher`], never the raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_level: Option<i32>,
}

impl User {
    /// Builds a stored record from creation input and a store-assigned id.
    pub fn from_new(id: String, new_user: NewUser) -> Self {
        let NewUser {
            email,
            password,
            first_name,
            last_name,
            permission_level,
        } = new_user;

        Self {
            id,
            email,
            password,
            first_name,
            last_name,
            permission_level,
        }
    }

    /// Applies a partial update in place.
    ///
    /// Both `self` and `patch` are destructured without `..`: adding a field to
    /// either type stops this from compiling until the field is either wired to
    /// the patch or explicitly marked as not patchable.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        let User {
            id: _,
            email: _,
            password,
            first_name,
            last_name,
            permission_level,
        } = self;

        let UserPatch {
            password: new_password,
            first_name: new_first_name,
            last_name: new_last_name,
            permission_level: new_permission_level,
        } = patch;

        if let Some(value) = new_password {
            *password = value;
        }
        if let Some(value) = new_first_name {
            *first_name = value;
        }
        if let Some(value) = new_last_name {
            *last_name = value;
        }
        if let Some(value) = new_permission_level {
            *permission_level = value;
        }
    }
}

/// Input for creating a user. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_level: Option<i32>,
}

/// Partial update for an existing user; its fields are the patch allow-list.
///
/// `None` leaves a field unchanged. For optional record fields,
/// `Some(None)` clears the value and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub password: Option<String>,
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub permission_level: Option<Option<i32>>,
}

impl UserPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
