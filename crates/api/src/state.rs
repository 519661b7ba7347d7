use std::sync::Arc;

use flatprice_inference::ModelRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Nothing here is
/// mutated after startup: the registry is loaded once and read-only.
#[derive(Clone)]
pub struct AppState {
    /// The four pre-fit artifacts, one transformer/model pair per category.
    pub registry: Arc<ModelRegistry>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
