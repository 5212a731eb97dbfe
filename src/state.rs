use crate::store::{Record, Store};
use std::sync::Arc;

/// Shared application state
///
/// One store per service, created at startup and dropped when the server
/// shuts down.
pub struct AppState<R> {
    pub store: Arc<Store<R>>,
}

impl<R: Record> AppState<R> {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Store::new()),
        }
    }
}

impl<R: Record> Default for AppState<R> {
    fn default() -> Self {
        Self::new()
    }
}

// Derived Clone would demand `R: Clone`.
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
