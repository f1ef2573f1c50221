//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Storage failures are logged and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::db::DbError;
use crate::models::{FormErrors, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Form submission failed validation (422); the form is echoed back
    InvalidForm { errors: FormErrors, form: Value },

    /// Malformed request parameter (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Write rejected by a constraint, e.g. deleting a booked venue (409)
    Conflict { message: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    /// Validation failure for `form`, which is returned so it can be redisplayed.
    pub fn invalid_form(errors: FormErrors, form: &impl Serialize) -> Self {
        Self::InvalidForm {
            errors,
            form: serde_json::to_value(form).unwrap_or(Value::Null),
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidForm { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::InvalidForm { errors, form } => json!({
                "error": "validation_error",
                "message": "some fields failed validation",
                "fields": errors,
                "form": form
            }),
            Self::Validation(e) => json!({
                "error": "validation_error",
                "message": e.to_string()
            }),
            Self::NotFound { resource, id } => json!({
                "error": "not_found",
                "message": format!("{} '{}' not found", resource, id)
            }),
            Self::Conflict { message } => json!({
                "error": "conflict",
                "message": message
            }),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "Database error");
                json!({
                    "error": "internal_error",
                    "message": "an internal error occurred"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::ConstraintViolated { constraint } => Self::Conflict {
                message: format!("the change conflicts with existing records ({})", constraint),
            },
            DbError::Unavailable(_) => Self::Database(e),
        }
    }
}

/// Fallback for unmatched routes.
pub async fn not_found_fallback(uri: axum::http::Uri) -> ApiError {
    ApiError::not_found("page", uri.path())
}
