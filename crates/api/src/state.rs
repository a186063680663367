use std::sync::Arc;

use repositori_core::books::Shelf;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: repositori_db::DbPool,
    /// Server configuration (JWT and credentials are read by auth handlers).
    pub config: Arc<ServerConfig>,
    /// Process-local shelf behind the `/books` demo.
    pub books: Arc<RwLock<Shelf>>,
}

impl AppState {
    pub fn new(pool: repositori_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            books: Arc::new(RwLock::new(Shelf::new())),
        }
    }
}
