/// Shared application state
use roster_storage::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<UserStore>,
}

impl AppState {
    pub fn new(db: Arc<UserStore>) -> Self {
        Self { db }
    }
}
