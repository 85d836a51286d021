use std::sync::Arc;

use praktika_core::storage::StorageLayout;

use crate::config::ServerConfig;
use crate::export::TableExporter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: praktika_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Working/archive folder layout.
    pub storage: Arc<StorageLayout>,
    /// Spreadsheet/cloud export collaborator.
    pub exporter: Arc<dyn TableExporter>,
}
