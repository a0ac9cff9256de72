//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::todo_service::TodoService`] - Ownership-checked to-do CRUD
//! - [`services::auth_service::AuthService`] - Bearer token issuing and verification

pub mod services;
