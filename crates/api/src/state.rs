use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    pub pool: aqar_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Backend that stores listing images (local directory or S3).
    pub images: Arc<dyn ImageStore>,
}
