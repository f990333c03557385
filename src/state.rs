use std::sync::Arc;

use crate::catalog::SharedCatalog;
use crate::config::Config;

/// Shared application state available to all handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: SharedCatalog, config: Config) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }
}
