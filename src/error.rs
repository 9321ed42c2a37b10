//! Application error type and its HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// JSON body returned for every failed request.
///
/// ```json
/// { "error": "Missing required field email" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors produced by the store, services, validation checks, and handlers.
///
/// Every variant carries a client-facing `message` and structured `details`
/// that are written to the log but never returned to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request rejected by a validation check (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The addressed record does not exist (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Anything else (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// The 404 for an unknown user id, shared by the store and the service.
    pub fn user_not_found(id: &str) -> Self {
        Self::not_found(format!("User {} not found", id), json!({ "id": id }))
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Structured details attached to this error.
    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, details = %self.details(), "Request failed");
        } else {
            tracing::debug!(error = %self, details = %self.details(), "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Converts `validator` failures into a 400 naming the first offending field.
///
/// Fields are reported in alphabetical order so the message is stable.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .first()
            .and_then(|(_, errs)| errs.first())
            .and_then(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .unwrap_or_else(|| "Validation failed".to_string());

        let details: Vec<String> = fields.iter().map(|(f, _)| f.to_string()).collect();

        AppError::bad_request(message, json!({ "fields": details }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_message() {
        let response = AppError::bad_request("Invalid email", json!({})).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid email" }));
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response =
            AppError::not_found("User abc not found", json!({ "id": "abc" })).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "User abc not found" })
        );
    }

    #[tokio::test]
    async fn test_user_not_found_names_the_id() {
        let err = AppError::user_not_found("abc");

        assert_eq!(err.details(), &json!({ "id": "abc" }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "User abc not found" })
        );
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let response =
            AppError::internal("Internal error", json!({ "secret": "x" })).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Internal error" }));
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("User x not found", json!({}));
        assert_eq!(err.to_string(), "User x not found");
    }
}
