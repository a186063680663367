//! Route definitions for the `/data-prodi` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::study_program;
use crate::state::AppState;

/// Routes mounted at `/data-prodi`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(study_program::list).post(study_program::create))
        .route(
            "/{id}",
            get(study_program::get_by_id)
                .put(study_program::update)
                .delete(study_program::delete),
        )
}
