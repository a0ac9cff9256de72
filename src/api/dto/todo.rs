//! DTOs for to-do item endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Todo, TodoPatch};

/// JSON representation of a stored to-do item.
#[derive(Debug, Serialize)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

impl From<Todo> for TodoItem {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            priority: t.priority,
            complete: t.complete,
            owner_id: t.owner_id,
        }
    }
}

/// Request body for `POST /todo`.
///
/// Unknown fields are ignored, so a client-supplied `owner_id` has no effect.
/// `priority` is an opaque integer.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 1000, message = "Description must be 1-1000 characters"))]
    pub description: String,

    pub priority: i32,

    #[serde(default)]
    pub complete: bool,
}

/// Request body for `PUT /todo/{id}`.
///
/// All fields are optional; only provided fields are changed. At least one
/// must be present.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 1000, message = "Description must be 1-1000 characters"))]
    pub description: Option<String>,

    pub priority: Option<i32>,

    pub complete: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(r: UpdateTodoRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            priority: r.priority,
            complete: r.complete,
        }
    }
}
