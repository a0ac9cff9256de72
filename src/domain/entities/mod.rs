//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! and partial updates:
//!
//! - [`Todo`] - A stored to-do item
//! - [`NewTodo`] - Input for inserting a to-do item
//! - [`TodoPatch`] - Partial update, `None` leaves a field unchanged

pub mod todo;

pub use todo::{NewTodo, Todo, TodoPatch};
