//! Handlers for the `/data-dokumen` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use repositori_core::error::CoreError;
use repositori_core::types::DbId;
use repositori_db::models::document::{CreateDocument, Document, UpdateDocument};
use repositori_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Document";

/// POST /data-dokumen
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateDocument>,
) -> AppResult<(StatusCode, Json<Document>)> {
    let document = DocumentRepo::create(&state.pool, &input).await?;
    tracing::info!(id = document.id, nip = %document.nip, subject = %user.subject, "Document created");
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /data-dokumen
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Document>>> {
    let documents = DocumentRepo::list(&state.pool).await?;
    Ok(Json(documents))
}

/// GET /data-dokumen/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Document>> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(document))
}

/// PUT /data-dokumen/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDocument>,
) -> AppResult<Json<Document>> {
    let document = DocumentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(document))
}

/// DELETE /data-dokumen/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DocumentRepo::delete(&state.pool, id).await? {
        tracing::info!(id, subject = %user.subject, "Document deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
