//! Request extractors that enforce authentication.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated subject from a JWT Bearer token.

pub mod auth;
