//! Shared handler state.

use std::sync::Arc;

use bazaar_store::Store;

/// Cloned into every handler. The store itself is shared, never copied.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
