use axum::routing::get;
use axum::Router;

use crate::handlers::book;
use crate::state::AppState;

/// Routes mounted at `/books`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{position}    -> get_by_position
/// PUT    /{position}    -> update
/// DELETE /{position}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::list).post(book::create))
        .route(
            "/{position}",
            get(book::get_by_position)
                .put(book::update)
                .delete(book::delete),
        )
}
