//! The single configured login credential.

use super::password::{hash_password, is_phc_hash, verify_password};

/// The one username/password pair accepted by `POST /login`.
///
/// The password is only ever held as an Argon2id PHC hash.
#[derive(Clone)]
pub struct CredentialConfig {
    pub username: String,
    pub password_hash: String,
}

impl std::fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

impl CredentialConfig {
    /// Build a credential from a plaintext password, hashing it.
    pub fn from_plaintext(
        username: impl Into<String>,
        password: &str,
    ) -> Result<Self, argon2::password_hash::Error> {
        Ok(Self {
            username: username.into(),
            password_hash: hash_password(password)?,
        })
    }

    /// Load the credential from environment variables.
    ///
    /// | Env Var              | Required             |
    /// |----------------------|----------------------|
    /// | `AUTH_USERNAME`      | **yes**              |
    /// | `AUTH_PASSWORD_HASH` | one of the two       |
    /// | `AUTH_PASSWORD`      | one of the two       |
    ///
    /// `AUTH_PASSWORD_HASH` wins when both are set.
    ///
    /// # Panics
    ///
    /// Panics if the username is missing or empty, if neither password
    /// variable is set, or if the supplied hash is not a PHC string.
    pub fn from_env() -> Self {
        let username =
            std::env::var("AUTH_USERNAME").expect("AUTH_USERNAME must be set in the environment");
        assert!(!username.is_empty(), "AUTH_USERNAME must not be empty");

        if let Ok(password_hash) = std::env::var("AUTH_PASSWORD_HASH") {
            assert!(
                is_phc_hash(&password_hash),
                "AUTH_PASSWORD_HASH must be a PHC-formatted Argon2 hash"
            );
            return Self {
                username,
                password_hash,
            };
        }

        let password = std::env::var("AUTH_PASSWORD")
            .expect("AUTH_PASSWORD or AUTH_PASSWORD_HASH must be set in the environment");
        Self::from_plaintext(username, &password)
            .unwrap_or_else(|e| panic!("Failed to hash AUTH_PASSWORD: {e}"))
    }

    /// Whether `username` and `password` both match exactly.
    ///
    /// The hash is verified even when the username is wrong, so a rejected
    /// login costs the same whichever half was wrong.
    pub fn matches(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, argon2::password_hash::Error> {
        let password_ok = verify_password(password, &self.password_hash)?;
        let username_ok = username == self.username;
        Ok(username_ok & password_ok)
    }
}
