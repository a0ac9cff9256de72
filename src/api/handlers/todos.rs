//! Handlers for to-do item endpoints.
//!
//! Every handler runs behind [`crate::api::middleware::auth`], which puts the
//! caller's [`Identity`] into the request extensions.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::todo::{CreateTodoRequest, TodoItem, UpdateTodoRequest};
use crate::api::extract::{TodoId, ValidatedJson};
use crate::domain::entities::TodoPatch;
use crate::domain::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's to-do items.
///
/// # Endpoint
///
/// `GET /`
pub async fn list_todos_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    let todos = state.todo_service.list(&identity).await?;

    Ok(Json(todos.into_iter().map(TodoItem::from).collect()))
}

/// Returns one of the caller's to-do items.
///
/// # Endpoint
///
/// `GET /todo/{id}`
///
/// The item is wrapped in a single-element array.
///
/// # Errors
///
/// Returns 404 `{"detail": "Todo not found"}` if the item does not exist or
/// belongs to another user, and 422 if `id` is not an integer.
pub async fn get_todo_handler(
    TodoId(id): TodoId,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    let todo = state.todo_service.get(&identity, id).await?;

    Ok(Json(vec![TodoItem::from(todo)]))
}

/// Creates a to-do item owned by the caller.
///
/// # Endpoint
///
/// `POST /todo`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Learn coding!",
///   "description": "Need to practice everyday!",
///   "priority": 5,
///   "complete": false
/// }
/// ```
///
/// # Errors
///
/// Returns 422 if the body is malformed or fails validation.
pub async fn create_todo_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(payload): ValidatedJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoItem>), AppError> {
    let todo = state
        .todo_service
        .create(
            &identity,
            payload.title,
            payload.description,
            payload.priority,
            payload.complete,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TodoItem::from(todo))))
}

/// Updates one of the caller's to-do items.
///
/// # Endpoint
///
/// `PUT /todo/{id}`
///
/// Only provided fields are changed. `id` and `owner_id` never change.
///
/// # Errors
///
/// Returns 422 if the body is malformed, fails validation, or names no field.
/// Returns 404 if the item does not exist or belongs to another user.
pub async fn update_todo_handler(
    TodoId(id): TodoId,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(payload): ValidatedJson<UpdateTodoRequest>,
) -> Result<StatusCode, AppError> {
    let patch = TodoPatch::from(payload);

    if patch.is_empty() {
        return Err(AppError::validation(
            "Nothing to update",
            json!([{
                "field": null,
                "code": "empty_update",
                "message": "At least one of title, description, priority, complete is required",
            }]),
        ));
    }

    state.todo_service.update(&identity, id, patch).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes one of the caller's to-do items.
///
/// # Endpoint
///
/// `DELETE /todo/{id}`
///
/// # Errors
///
/// Returns 404 if the item does not exist or belongs to another user.
pub async fn delete_todo_handler(
    TodoId(id): TodoId,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<StatusCode, AppError> {
    state.todo_service.delete(&identity, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
