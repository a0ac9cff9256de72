//! Handlers for requests no route accepts.

use crate::error::AppError;

/// Unknown path: `404 {"detail": "Not Found"}`.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Not Found")
}

/// Known path, wrong method: `405 {"detail": "Method Not Allowed"}`.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed()
}
