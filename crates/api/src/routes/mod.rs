pub mod auth;
pub mod book;
pub mod document;
pub mod health;
pub mod lecturer;
pub mod study_program;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Paths are mounted at the root; existing clients call them unprefixed.
///
/// ```text
/// /login                          login (public)
///
/// /data-prodi                     list (public), create (auth)
/// /data-prodi/{id}                get (public), update, delete (auth)
///
/// /data-dosen                     list (public), create (auth)
/// /data-dosen/{nip}               get (public), update, delete (auth)
///
/// /data-dokumen                   list (public), create (auth)
/// /data-dokumen/{id}              get (public), update, delete (auth)
///
/// /books                          list, append (public)
/// /books/{position}               get, replace, remove (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/data-prodi", study_program::router())
        .nest("/data-dosen", lecturer::router())
        .nest("/data-dokumen", document::router())
        .nest("/books", book::router())
}
