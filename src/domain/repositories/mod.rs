//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; the PostgreSQL
//! implementation lives in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`TodoRepository`] - To-do item storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_todo.rs` for usage examples.

pub mod todo_repository;

pub use todo_repository::TodoRepository;

#[cfg(test)]
pub use todo_repository::MockTodoRepository;
