//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::CounterRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for counter storage
    pub repository: Arc<dyn CounterRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn CounterRepository>) -> Self {
        Self { repository }
    }
}
