use std::sync::Arc;

use storage::RaceStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RaceStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RaceStore>) -> Self {
        Self { store }
    }
}
