// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Application faults tied to the tenant that issued the request.
///
/// Each fault may carry a custom message; the envelope falls back to the
/// catalog default when it is absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TenantFault {
    #[error("tenant not found")]
    NotFound { message: Option<String> },

    #[error("tenant inactive")]
    Inactive { message: Option<String> },

    #[error("quota exceeded")]
    QuotaExceeded { message: Option<String> },
}

impl TenantFault {
    pub fn not_found() -> Self {
        TenantFault::NotFound { message: None }
    }

    pub fn inactive() -> Self {
        TenantFault::Inactive { message: None }
    }

    pub fn quota_exceeded(message: impl Into<String>) -> Self {
        TenantFault::QuotaExceeded { message: Some(message.into()) }
    }

    /// Transport status used when the fault is returned over HTTP.
    pub fn status_code(&self) -> StatusCode {
        match self {
            TenantFault::NotFound { .. } => StatusCode::NOT_FOUND,
            TenantFault::Inactive { .. } => StatusCode::FORBIDDEN,
            TenantFault::QuotaExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    pub fn custom_message(&self) -> Option<&str> {
        match self {
            TenantFault::NotFound { message }
            | TenantFault::Inactive { message }
            | TenantFault::QuotaExceeded { message } => message.as_deref(),
        }
    }
}

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("{0}")]
    BadRequest(String),
    #[error("{message}")]
    ValidationError {
        message: String,
        field_errors: Option<HashMap<String, String>>,
    },

    // 401 Unauthorized
    #[error("{0}")]
    Unauthorized(String),

    // 403 Forbidden
    #[error("{0}")]
    Forbidden(String),

    // 404 Not Found
    #[error("{0}")]
    NotFound(String),

    // 409 Conflict
    #[error("{0}")]
    Conflict(String),

    // 404 / 403 / 429 depending on the fault
    #[error(transparent)]
    Tenant(#[from] TenantFault),

    // 500 Internal Server Error
    #[error("{0}")]
    InternalServerError(String),

    // 503 Service Unavailable
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Tenant(fault) => fault.status_code(),
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Detail payload handed to the translator. Validation errors carry their
    /// field map so the first field message can surface.
    pub fn detail(&self) -> Value {
        match self {
            ApiError::ValidationError {
                message,
                field_errors: Some(field_errors),
            } => json!({ "detail": message, "field_errors": field_errors }),
            other => Value::String(other.to_string()),
        }
    }

    /// Extra data carried into the envelope, if any.
    pub fn data(&self) -> Value {
        match self {
            ApiError::ValidationError {
                field_errors: Some(field_errors),
                ..
            } => json!(field_errors),
            _ => Value::Null,
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(
        message: impl Into<String>,
        field_errors: Option<HashMap<String, String>>,
    ) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<crate::services::DirectoryError> for ApiError {
    fn from(err: crate::services::DirectoryError) -> Self {
        match err {
            crate::services::DirectoryError::AlreadyExists(name) => {
                ApiError::conflict(format!("Tenant '{}' already exists", name))
            }
            crate::services::DirectoryError::InvalidName(msg) => {
                let mut field_errors = HashMap::new();
                field_errors.insert("name".to_string(), msg.clone());
                ApiError::validation_error(msg, Some(field_errors))
            }
            crate::services::DirectoryError::Unavailable(msg) => {
                tracing::error!("Tenant directory unavailable: {}", msg);
                ApiError::service_unavailable("Tenant directory temporarily unavailable")
            }
        }
    }
}

// The error rides along in the response extensions so the envelope layer
// can translate it; the plain body is what clients see without that layer.
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let mut response = (status, Json(json!({ "detail": self.to_string() }))).into_response();
        response.extensions_mut().insert(self);
        response
    }
}
