//! Handlers for the in-memory `/books` demo.
//!
//! Books are addressed by 1-based position. Mutations answer with the
//! whole shelf. No authentication.

use axum::extract::{Path, State};
use axum::Json;
use repositori_core::books::Book;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /books
pub async fn create(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> Json<Vec<Book>> {
    let mut shelf = state.books.write().await;
    shelf.push(book);
    Json(shelf.list().to_vec())
}

/// GET /books
pub async fn list(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.books.read().await.list().to_vec())
}

/// GET /books/{position}
pub async fn get_by_position(
    State(state): State<AppState>,
    Path(position): Path<usize>,
) -> AppResult<Json<Book>> {
    let shelf = state.books.read().await;
    Ok(Json(shelf.get(position)?.clone()))
}

/// PUT /books/{position}
pub async fn update(
    State(state): State<AppState>,
    Path(position): Path<usize>,
    Json(book): Json<Book>,
) -> AppResult<Json<Vec<Book>>> {
    let mut shelf = state.books.write().await;
    shelf.replace(position, book)?;
    Ok(Json(shelf.list().to_vec()))
}

/// DELETE /books/{position}
pub async fn delete(
    State(state): State<AppState>,
    Path(position): Path<usize>,
) -> AppResult<Json<Vec<Book>>> {
    let mut shelf = state.books.write().await;
    shelf.remove(position)?;
    Ok(Json(shelf.list().to_vec()))
}
