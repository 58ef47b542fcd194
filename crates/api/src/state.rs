use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` (or a test harness) and injected into the
/// router; handlers never reach for ambient globals. This is cheaply
/// cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: placemark_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
