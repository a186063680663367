//! Handler for `POST /login`.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{issue, AuthError};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /login
///
/// Exchange the configured username + password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let config = &state.config;
    let issued = issue(
        &input.username,
        &input.password,
        &config.credentials,
        &config.jwt,
    );
    let access_token = match issued {
        Ok(token) => token,
        Err(AppError::Auth(AuthError::InvalidCredentials)) => {
            tracing::warn!(username = %input.username, "Login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }
        Err(e) => return Err(e),
    };

    tracing::info!(username = %input.username, "Login succeeded");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in: config.jwt.expires_in_secs(),
    }))
}
