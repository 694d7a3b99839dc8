//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use todo_auth::Authorizer;
use todo_core::config::AppConfig;
use todo_service::TodoService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration, read-only after startup.
    pub config: Arc<AppConfig>,
    /// Todo use cases.
    pub todo_service: Arc<TodoService>,
    /// Bearer-token authorizer.
    pub authorizer: Arc<Authorizer>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(config: AppConfig, todo_service: TodoService, authorizer: Authorizer) -> Self {
        Self {
            config: Arc::new(config),
            todo_service: Arc::new(todo_service),
            authorizer: Arc::new(authorizer),
        }
    }
}
