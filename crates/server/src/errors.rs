use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body: `{"error": {"status", "message", "detail"}}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, title: title.into(), detail }
    }

    pub fn not_found(detail: Option<String>) -> Self { Self::new(StatusCode::NOT_FOUND, "Not Found", detail) }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "status": self.status.as_u16(),
                "message": self.title,
                "detail": self.detail,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

/// Only a missing company is a client error; validation and duplicate codes
/// are reported as server failures, same as store errors.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Validation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Validation Error"),
            ServiceError::Conflict(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Conflict"),
            ServiceError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database Error"),
        };
        if status.is_server_error() {
            error!(err = %e, code = e.code(), "company request failed");
        }
        Self::new(status, title, Some(e.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::not_found("company"), StatusCode::NOT_FOUND),
            (ServiceError::Validation("name required".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Conflict("dup".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Db("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(JsonApiError::from(err).status, expected);
        }
    }

    #[test]
    fn response_carries_status() {
        let resp = JsonApiError::not_found(None).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
