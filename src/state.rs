//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, TodoService};
use crate::infrastructure::persistence::PgTodoRepository;

/// Services shared by all requests.
///
/// Cloning is cheap; each field is reference-counted. Nothing in here is
/// mutable, so requests never coordinate through it. Per-request storage
/// sessions are drawn from the pool held inside the repository.
#[derive(Clone)]
pub struct AppState {
    pub todo_service: Arc<TodoService<PgTodoRepository>>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(
        todo_service: Arc<TodoService<PgTodoRepository>>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            todo_service,
            auth_service,
        }
    }
}
