//! Route definitions for the `/data-dokumen` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::document;
use crate::state::AppState;

/// Routes mounted at `/data-dokumen`.
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
        .route("/", get(document::list).post(document::create))
        .route(
            "/{id}",
            get(document::get_by_id)
                .put(document::update)
                .delete(document::delete),
        )
}
