//! Route definitions for the `/data-dosen` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::lecturer;
use crate::state::AppState;

/// Routes mounted at `/data-dosen`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /{nip}    -> get_by_nip
/// PUT    /{nip}    -> update
/// DELETE /{nip}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lecturer::list).post(lecturer::create))
        .route(
            "/{nip}",
            get(lecturer::get_by_nip)
                .put(lecturer::update)
                .delete(lecturer::delete),
        )
}
