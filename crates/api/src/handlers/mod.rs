//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Database-backed handlers delegate to the matching repository in
//! `repositori_db` and map errors via [`AppError`](crate::error::AppError).
//! Mutating handlers take an [`AuthUser`](crate::middleware::auth::AuthUser);
//! reads do not.

pub mod auth;
pub mod book;
pub mod document;
pub mod lecturer;
pub mod study_program;
