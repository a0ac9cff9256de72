//! Application error type and its HTTP representation.
//!
//! Every error response carries the same body shape:
//!
//! ```json
//! { "detail": "Todo not found" }
//! ```
//!
//! `detail` is a string for most errors and a list of field violations for
//! validation failures.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    detail: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    MethodNotAllowed { message: String },
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    TooManyRequests { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::TooManyRequests {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The 404 every ownership or existence check collapses into.
    pub fn todo_not_found() -> Self {
        Self::not_found("Todo not found")
    }

    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed {
            message: "Method Not Allowed".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let unauthorized = matches!(self, AppError::Unauthorized { .. });

        let detail = match self {
            AppError::Validation { details, .. } => details,
            AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::TooManyRequests { message }
            | AppError::Internal { message } => Value::String(message),
        };

        let mut response = (status, Json(ErrorBody { detail })).into_response();

        // RFC 6750
        if unauthorized {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if matches!(e, sqlx::Error::RowNotFound) {
            return AppError::todo_not_found();
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Internal server error")
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<Value> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    json!({
                        "field": field,
                        "code": err.code,
                        "message": err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("invalid value for '{field}'")),
                    })
                })
            })
            .collect();

        // HashMap iteration order is not stable.
        fields.sort_by(|a, b| a["field"].as_str().cmp(&b["field"].as_str()));

        AppError::validation("Validation failed", Value::Array(fields))
    }
}

/// `{id}` is the only path parameter the API has.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(
            "Invalid path parameter",
            json!([{
                "field": "id",
                "code": "invalid_path",
                "message": rejection.body_text(),
            }]),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(
            "Invalid request body",
            json!([{
                "field": null,
                "code": "invalid_body",
                "message": rejection.body_text(),
            }]),
        )
    }
}
