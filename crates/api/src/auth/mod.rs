//! Login and bearer-token verification.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`credentials`] -- the configured username/password pair.
//! - [`jwt`] -- access-token generation and validation.
//!
//! [`issue`] and [`verify`] are the two operations the HTTP layer uses.
//! Both are pure apart from reading the clock; the `_at` variants take the
//! clock as an argument.

pub mod credentials;
pub mod jwt;
pub mod password;

use chrono::Utc;
use repositori_core::types::Timestamp;

use self::credentials::CredentialConfig;
use self::jwt::{Claims, JwtConfig};
use crate::error::{AppError, AppResult};

/// Authentication failures surfaced to clients. Both map to 401.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Login with a username/password pair other than the configured one.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Missing, malformed, forged, or expired bearer token.
    #[error("Invalid or expired token")]
    Unauthenticated,
}

/// Check the credential pair and issue an access token for `username`.
pub fn issue(
    username: &str,
    password: &str,
    credentials: &CredentialConfig,
    jwt: &JwtConfig,
) -> AppResult<String> {
    issue_at(username, password, credentials, jwt, Utc::now())
}

/// [`issue`] with an explicit issue time.
pub fn issue_at(
    username: &str,
    password: &str,
    credentials: &CredentialConfig,
    jwt: &JwtConfig,
    now: Timestamp,
) -> AppResult<String> {
    let matched = credentials
        .matches(username, password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !matched {
        return Err(AuthError::InvalidCredentials.into());
    }

    jwt::generate_access_token_at(username, jwt, now)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
}

/// Verify a bearer token, returning its claims if it is currently valid.
pub fn verify(token: &str, jwt: &JwtConfig) -> Option<Claims> {
    jwt::validate_token(token, jwt)
}

/// [`verify`] at an explicit instant.
pub fn verify_at(token: &str, jwt: &JwtConfig, now: Timestamp) -> Option<Claims> {
    jwt::validate_token_at(token, jwt, now)
}
