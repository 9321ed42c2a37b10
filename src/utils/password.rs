//! Salted password hashing.

use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Length of the per-password random salt.
const SALT_LENGTH_BYTES: usize = 16;

/// Separates the encoded salt from the MAC in a stored hash.
const SEPARATOR: char = '$';

/// Hashes and verifies user passwords.
///
/// A stored hash has the form `base64(salt)$hex(mac)` where
/// `mac = HMAC-SHA256(secret, salt || password)`. The salt is fresh for every
/// call, so hashing the same password twice yields different strings. Without
/// the server-side secret a leaked hash cannot be checked offline.
#[derive(Clone)]
pub struct PasswordHasher {
    secret: String,
}

impl PasswordHasher {
    /// Creates a hasher keyed by `secret`.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn mac(&self, salt: &[u8], password: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(salt);
        mac.update(password.as_bytes());
        mac
    }

    /// Hashes `password` with a new random salt.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the system random number generator fails.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let mut salt = [0u8; SALT_LENGTH_BYTES];
        getrandom::fill(&mut salt).map_err(|e| {
            AppError::internal(
                "Failed to hash password",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let digest = self.mac(&salt, password).finalize().into_bytes();

        Ok(format!(
            "{}{}{}",
            base64::engine::general_purpose::STANDARD_NO_PAD.encode(salt),
            SEPARATOR,
            hex::encode(digest)
        ))
    }

    /// Checks `password` against a hash produced by [`Self::hash`].
    ///
    /// Returns `false` for malformed hashes. Comparison is constant-time.
    pub fn verify(&self, password: &str, hashed: &str) -> bool {
        let Some((salt, digest)) = hashed.split_once(SEPARATOR) else {
            return false;
        };

        let Ok(salt) = base64::engine::general_purpose::STANDARD_NO_PAD.decode(salt) else {
            return false;
        };
        let Ok(digest) = hex::decode(digest) else {
            return false;
        };

        self.mac(&salt, password).verify_slice(&digest).is_ok()
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("secret", &"***")
            .finish()
    }
}
