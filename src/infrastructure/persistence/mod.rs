//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgTodoRepository`] - To-do item storage

pub mod pg_todo_repository;

pub use pg_todo_repository::PgTodoRepository;
