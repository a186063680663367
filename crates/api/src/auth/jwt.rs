//! JWT access-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs containing a [`Claims`] payload. A
//! token is valid iff its signature verifies under the configured secret
//! and its `exp` is strictly later than the verification time. Expiry is
//! checked here against an explicit clock instead of inside `jsonwebtoken`,
//! so there is no leeway and tests can move time freely.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use repositori_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject -- the username that logged in.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 30).
    pub access_token_expiry_mins: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry_mins", &self.access_token_expiry_mins)
            .finish()
    }
}

/// Default access token expiry in minutes.
pub const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 30;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `30`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty, or if the expiry is
    /// not a positive integer.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");
        assert!(
            access_token_expiry_mins > 0,
            "JWT_ACCESS_EXPIRY_MINS must be positive"
        );

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Access token lifetime in seconds, as reported to clients.
    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

/// Outcome of checking a token at a given instant.
///
/// Callers outside this module only see [`TokenCheck::into_claims`], which
/// folds `Expired` and `Invalid` together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenCheck {
    Valid(Claims),
    /// Signature verified but `exp` is not after the check time.
    Expired,
    /// Malformed, wrong algorithm, or signed with another secret.
    Invalid,
}

impl TokenCheck {
    pub fn into_claims(self) -> Option<Claims> {
        match self {
            TokenCheck::Valid(claims) => Some(claims),
            TokenCheck::Expired | TokenCheck::Invalid => None,
        }
    }
}

/// Generate an HS256 access token for `subject`, issued now.
pub fn generate_access_token(
    subject: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    generate_access_token_at(subject, config, Utc::now())
}

/// Generate an HS256 access token for `subject` as if issued at `issued_at`.
pub fn generate_access_token_at(
    subject: &str,
    config: &JwtConfig,
    issued_at: Timestamp,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = issued_at.timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        exp: iat + config.expires_in_secs(),
        iat,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature and expiry of `token` at instant `now`.
pub fn check_token_at(token: &str, config: &JwtConfig, now: Timestamp) -> TokenCheck {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    ) {
        Ok(data) if data.claims.exp > now.timestamp() => TokenCheck::Valid(data.claims),
        Ok(_) => TokenCheck::Expired,
        Err(_) => TokenCheck::Invalid,
    }
}

/// Validate a token against the current time, returning its [`Claims`].
pub fn validate_token(token: &str, config: &JwtConfig) -> Option<Claims> {
    validate_token_at(token, config, Utc::now())
}

/// Validate a token at instant `now`. Expired and invalid tokens both yield
/// `None`; the distinction is only logged.
pub fn validate_token_at(token: &str, config: &JwtConfig, now: Timestamp) -> Option<Claims> {
    let check = check_token_at(token, config, now);
    match &check {
        TokenCheck::Valid(_) => {}
        TokenCheck::Expired => tracing::debug!("Rejected expired access token"),
        TokenCheck::Invalid => tracing::debug!("Rejected invalid access token"),
    }
    check.into_claims()
}
