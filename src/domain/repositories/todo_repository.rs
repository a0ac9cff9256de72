//! Repository trait for to-do item storage.

use crate::domain::entities::{NewTodo, Todo, TodoPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for to-do items.
///
/// Each mutating method runs in exactly one storage transaction. Read methods
/// never commit. Ownership is enforced by the caller through
/// [`crate::domain::identity::Identity::owns`]; `update` and `delete` also
/// scope their statements by `owner_id` so a row can never change hands.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTodoRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts a new item and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError>;

    /// Finds an item by id regardless of owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError>;

    /// Lists every item of one owner in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Todo>, AppError>;

    /// Overwrites the fields present in `patch`.
    ///
    /// Returns `None` when no row matches both `id` and `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: i64,
        owner_id: i64,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, AppError>;

    /// Hard-deletes an item.
    ///
    /// Returns `false` when no row matches both `id` and `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64, owner_id: i64) -> Result<bool, AppError>;

    /// Checks that the storage backend answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
