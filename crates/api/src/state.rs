use std::sync::Arc;

use cms_db::repositories::CmsRepository;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Course and student storage.
    pub repo: Arc<dyn CmsRepository>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
