use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Library;
use crate::services::{Catalog, ContextSignals, RandomSignals};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only for the lifetime of the process
    pub catalog: Arc<Catalog>,
    pub signals: Arc<dyn ContextSignals>,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    pub library: Library,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Sample catalog with randomly drawn context signals
    pub fn new() -> Self {
        Self::with_parts(Catalog::sample(), Arc::new(RandomSignals))
    }

    pub fn with_parts(catalog: Catalog, signals: Arc<dyn ContextSignals>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            signals,
            inner: Arc::new(RwLock::new(AppStateInner {
                library: Library::new(),
            })),
        }
    }
}
