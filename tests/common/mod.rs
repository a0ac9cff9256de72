#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use todos_api::application::services::{AuthService, TodoService};
use todos_api::domain::identity::Identity;
use todos_api::infrastructure::persistence::PgTodoRepository;
use todos_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

pub fn test_auth_service() -> AuthService {
    AuthService::new(TEST_JWT_SECRET)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let todo_repo = Arc::new(PgTodoRepository::new(Arc::new(pool)));

    AppState::new(
        Arc::new(TodoService::new(todo_repo)),
        Arc::new(test_auth_service()),
    )
}

pub fn jayhus() -> Identity {
    Identity::new(1, "jayhus", "admin")
}

pub fn other_user() -> Identity {
    Identity::new(2, "someone", "user")
}

/// Signed access token for `identity`.
pub fn token_for(identity: &Identity) -> String {
    test_auth_service().issue_token(identity, 20).unwrap()
}

pub async fn create_test_todo(pool: &PgPool, title: &str, owner_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO todos (title, description, priority, complete, owner_id) \
         VALUES ($1, 'Need to practice everyday!', 5, FALSE, $2) RETURNING id",
    )
    .bind(title)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_todos(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await
        .unwrap()
}
