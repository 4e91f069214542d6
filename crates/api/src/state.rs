use std::sync::Arc;

use gradebox_db::{GradeStore, InMemoryGradeStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Grade storage backend.
    pub grades: Arc<dyn GradeStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by a fresh in-memory grade store.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self {
            grades: Arc::new(InMemoryGradeStore::new()),
            config: Arc::new(config),
        }
    }
}
