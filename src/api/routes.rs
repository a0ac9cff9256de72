//! API route configuration.
//!
//! All to-do endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_todo_handler, delete_todo_handler, get_todo_handler, list_todos_handler,
    update_todo_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All to-do routes, to be wrapped in Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /`           - List the caller's items
/// - `POST   /todo`       - Create an item
/// - `GET    /todo/{id}`  - Fetch one item (single-element array)
/// - `PUT    /todo/{id}`  - Update an item
/// - `DELETE /todo/{id}`  - Delete an item
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos_handler))
        .route("/todo", post(create_todo_handler))
        .route(
            "/todo/{id}",
            get(get_todo_handler)
                .put(update_todo_handler)
                .delete(delete_todo_handler),
        )
}
