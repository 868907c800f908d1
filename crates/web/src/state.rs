use std::sync::Arc;

use limpeza_db::Db;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: `Db` and the config are both behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Dataset store handle.
    pub db: Db,
    pub config: Arc<ServerConfig>,
}
