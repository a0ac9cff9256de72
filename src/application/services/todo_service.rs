//! Ownership-checked to-do item service.

use std::sync::Arc;

use crate::domain::entities::{NewTodo, Todo, TodoPatch};
use crate::domain::identity::Identity;
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

/// Service for a caller's own to-do items.
///
/// Every operation that touches an existing item goes through
/// [`Identity::owns`]. An item that exists but belongs to someone else is
/// reported as [`AppError::NotFound`], the same as a missing one.
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a new to-do service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the caller's items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, identity: &Identity) -> Result<Vec<Todo>, AppError> {
        let todos = self.repository.list_by_owner(identity.id).await?;

        Ok(todos.into_iter().filter(|t| identity.owns(t)).collect())
    }

    /// Retrieves one of the caller's items.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the item does not exist or is not owned
    /// by the caller.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, identity: &Identity, id: i64) -> Result<Todo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|t| identity.owns(t))
            .ok_or_else(AppError::todo_not_found)
    }

    /// Creates an item owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(
        &self,
        identity: &Identity,
        title: String,
        description: String,
        priority: i32,
        complete: bool,
    ) -> Result<Todo, AppError> {
        let new_todo = NewTodo {
            title,
            description,
            priority,
            complete,
            owner_id: identity.id,
        };

        let todo = self.repository.create(new_todo).await?;
        tracing::info!(todo_id = todo.id, owner_id = todo.owner_id, "Todo created");

        Ok(todo)
    }

    /// Overwrites the fields present in `patch` on one of the caller's items.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the item does not exist or is not owned
    /// by the caller.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(
        &self,
        identity: &Identity,
        id: i64,
        patch: TodoPatch,
    ) -> Result<Todo, AppError> {
        let existing = self.get(identity, id).await?;

        let todo = self
            .repository
            .update(existing.id, identity.id, patch)
            .await?
            .ok_or_else(AppError::todo_not_found)?;
        tracing::info!(todo_id = todo.id, owner_id = todo.owner_id, "Todo updated");

        Ok(todo)
    }

    /// Hard-deletes one of the caller's items.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the item does not exist or is not owned
    /// by the caller.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, identity: &Identity, id: i64) -> Result<(), AppError> {
        let existing = self.get(identity, id).await?;

        if !self.repository.delete(existing.id, identity.id).await? {
            return Err(AppError::todo_not_found());
        }
        tracing::info!(todo_id = id, owner_id = identity.id, "Todo deleted");

        Ok(())
    }

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database does not answer.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTodoRepository;

    fn owner() -> Identity {
        Identity::new(1, "jayhus", "admin")
    }

    fn stranger() -> Identity {
        Identity::new(2, "someone", "user")
    }

    fn create_test_todo(id: i64, owner_id: i64) -> Todo {
        Todo::new(
            id,
            "Learn coding!".to_string(),
            "Need to practice everyday!".to_string(),
            5,
            false,
            owner_id,
        )
    }

    #[tokio::test]
    async fn test_list_returns_owner_items() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_list_by_owner()
            .withf(|owner_id| *owner_id == 1)
            .times(1)
            .returning(|_| Ok(vec![create_test_todo(1, 1), create_test_todo(3, 1)]));

        let service = TodoService::new(Arc::new(mock_repo));

        let todos = service.list(&owner()).await.unwrap();

        assert_eq!(todos.len(), 2);
        assert!(todos.iter().all(|t| t.owner_id == 1));
    }

    #[tokio::test]
    async fn test_list_applies_ownership_predicate() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_list_by_owner()
            .times(1)
            .returning(|_| Ok(vec![create_test_todo(1, 1), create_test_todo(2, 9)]));

        let service = TodoService::new(Arc::new(mock_repo));

        let todos = service.list(&owner()).await.unwrap();

        assert_eq!(todos, vec![create_test_todo(1, 1)]);
    }

    #[tokio::test]
    async fn test_get_success() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(create_test_todo(1, 1))));

        let service = TodoService::new(Arc::new(mock_repo));

        let todo = service.get(&owner(), 1).await.unwrap();

        assert_eq!(todo.title, "Learn coding!");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service.get(&owner(), 999).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_foreign_item_is_not_found() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(create_test_todo(1, 1))));

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service.get(&stranger(), 1).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_sets_owner_from_identity() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_todo| new_todo.owner_id == 2 && new_todo.title == "new Todo!")
            .times(1)
            .returning(|new_todo| {
                Ok(Todo::new(
                    10,
                    new_todo.title,
                    new_todo.description,
                    new_todo.priority,
                    new_todo.complete,
                    new_todo.owner_id,
                ))
            });

        let service = TodoService::new(Arc::new(mock_repo));

        let todo = service
            .create(
                &stranger(),
                "new Todo!".to_string(),
                "New todo description".to_string(),
                5,
                false,
            )
            .await
            .unwrap();

        assert_eq!(todo.id, 10);
        assert_eq!(todo.owner_id, 2);
    }

    #[tokio::test]
    async fn test_update_success() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(create_test_todo(1, 1))));

        mock_repo
            .expect_update()
            .withf(|id, owner_id, patch| {
                *id == 1 && *owner_id == 1 && patch.complete == Some(true)
            })
            .times(1)
            .returning(|_, _, _| {
                let mut todo = create_test_todo(1, 1);
                todo.complete = true;
                Ok(Some(todo))
            });

        let service = TodoService::new(Arc::new(mock_repo));

        let patch = TodoPatch {
            complete: Some(true),
            ..Default::default()
        };
        let todo = service.update(&owner(), 1, patch).await.unwrap();

        assert!(todo.complete);
        assert_eq!(todo.owner_id, 1);
    }

    #[tokio::test]
    async fn test_update_foreign_item_never_writes() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(create_test_todo(1, 1))));

        mock_repo.expect_update().never();

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service
            .update(&stranger(), 1, TodoPatch::default())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_row_vanished() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(create_test_todo(1, 1))));

        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _, _| Ok(None));

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service.update(&owner(), 1, TodoPatch::default()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(create_test_todo(1, 1))));

        mock_repo
            .expect_delete()
            .withf(|id, owner_id| *id == 1 && *owner_id == 1)
            .times(1)
            .returning(|_, _| Ok(true));

        let service = TodoService::new(Arc::new(mock_repo));

        assert!(service.delete(&owner(), 1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_foreign_item_never_writes() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(create_test_todo(1, 1))));

        mock_repo.expect_delete().never();

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service.delete(&stranger(), 1).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_list_by_owner()
            .times(1)
            .returning(|_| Err(AppError::internal("Internal server error")));

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service.list(&owner()).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
