//! Handlers for the `/data-dosen` resource, keyed by NIP.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use repositori_core::error::CoreError;
use repositori_db::models::lecturer::{CreateLecturer, Lecturer, UpdateLecturer};
use repositori_db::repositories::LecturerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Lecturer";

/// POST /data-dosen
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateLecturer>,
) -> AppResult<(StatusCode, Json<Lecturer>)> {
    let lecturer = LecturerRepo::create(&state.pool, &input).await?;
    tracing::info!(nip = %lecturer.nip, subject = %user.subject, "Lecturer created");
    Ok((StatusCode::CREATED, Json(lecturer)))
}

/// GET /data-dosen
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Lecturer>>> {
    let lecturers = LecturerRepo::list(&state.pool).await?;
    Ok(Json(lecturers))
}

/// GET /data-dosen/{nip}
pub async fn get_by_nip(
    State(state): State<AppState>,
    Path(nip): Path<String>,
) -> AppResult<Json<Lecturer>> {
    let lecturer = LecturerRepo::find_by_nip(&state.pool, &nip)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, &nip)))?;
    Ok(Json(lecturer))
}

/// PUT /data-dosen/{nip}
///
/// The body may carry a different `nip`, which renames the lecturer.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(nip): Path<String>,
    Json(input): Json<UpdateLecturer>,
) -> AppResult<Json<Lecturer>> {
    let lecturer = LecturerRepo::update(&state.pool, &nip, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, &nip)))?;
    Ok(Json(lecturer))
}

/// DELETE /data-dosen/{nip}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(nip): Path<String>,
) -> AppResult<StatusCode> {
    if LecturerRepo::delete(&state.pool, &nip).await? {
        tracing::info!(%nip, subject = %user.subject, "Lecturer deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, &nip)))
    }
}
