//! Handlers for the `/data-prodi` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use repositori_core::error::CoreError;
use repositori_core::types::DbId;
use repositori_db::models::study_program::{
    CreateStudyProgram, StudyProgram, UpdateStudyProgram,
};
use repositori_db::repositories::StudyProgramRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "StudyProgram";

/// POST /data-prodi
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateStudyProgram>,
) -> AppResult<(StatusCode, Json<StudyProgram>)> {
    let program = StudyProgramRepo::create(&state.pool, &input).await?;
    tracing::info!(id = program.id, subject = %user.subject, "Study program created");
    Ok((StatusCode::CREATED, Json(program)))
}

/// GET /data-prodi
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StudyProgram>>> {
    let programs = StudyProgramRepo::list(&state.pool).await?;
    Ok(Json(programs))
}

/// GET /data-prodi/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StudyProgram>> {
    let program = StudyProgramRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(program))
}

/// PUT /data-prodi/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudyProgram>,
) -> AppResult<Json<StudyProgram>> {
    let program = StudyProgramRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(program))
}

/// DELETE /data-prodi/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StudyProgramRepo::delete(&state.pool, id).await? {
        tracing::info!(id, subject = %user.subject, "Study program deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
