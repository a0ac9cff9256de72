//! PostgreSQL implementation of the to-do repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTodo, Todo, TodoPatch};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    description: String,
    priority: i32,
    complete: bool,
    owner_id: i64,
}

impl From<TodoRow> for Todo {
    fn from(r: TodoRow) -> Self {
        Todo::new(
            r.id,
            r.title,
            r.description,
            r.priority,
            r.complete,
            r.owner_id,
        )
    }
}

/// PostgreSQL repository for to-do items.
///
/// The pool is the session factory: every call checks out its own connection
/// and returns it when the call ends. Mutations run inside a transaction that
/// rolls back on drop unless committed.
pub struct PgTodoRepository {
    pool: Arc<PgPool>,
}

impl PgTodoRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, description, priority, complete, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, priority, complete, owner_id
            "#,
        )
        .bind(new_todo.title)
        .bind(new_todo.description)
        .bind(new_todo.priority)
        .bind(new_todo.complete)
        .bind(new_todo.owner_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, priority, complete, owner_id
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Todo::from))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Todo>, AppError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, priority, complete, owner_id
            FROM todos
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        owner_id: i64,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos SET
                title       = COALESCE($3::TEXT, title),
                description = COALESCE($4::TEXT, description),
                priority    = COALESCE($5::INTEGER, priority),
                complete    = COALESCE($6::BOOLEAN, complete)
            WHERE id = $1 AND owner_id = $2
            RETURNING id, title, description, priority, complete, owner_id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.priority)
        .bind(patch.complete)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.map(Todo::from))
    }

    async fn delete(&self, id: i64, owner_id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
