use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;

use super::codes::{self, ErrorCatalog};
use super::{detail_text, Envelope};
use crate::error::{ApiError, TenantFault};

/// Maps raised errors and transport-level error responses to a failure
/// envelope.
#[derive(Debug, Clone)]
pub struct ErrorTranslator {
    catalog: Arc<ErrorCatalog>,
}

impl ErrorTranslator {
    pub fn new(catalog: Arc<ErrorCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ErrorCatalog {
        &self.catalog
    }

    /// Translate an error raised by a handler or middleware.
    pub fn translate(&self, error: &ApiError) -> Envelope {
        let envelope = match error {
            ApiError::Tenant(fault) => return self.translate_fault(fault),
            other => self.translate_status(other.status_code(), Some(&other.detail())),
        };

        if envelope.code == codes::SERVER_ERROR {
            tracing::error!("Request failed with server error: {}", error);
        } else {
            tracing::debug!(code = envelope.code, "Request rejected: {}", error);
        }

        Envelope { data: error.data(), ..envelope }
    }

    /// Translate an error response identified only by its transport status
    /// and, optionally, the body it carried.
    pub fn translate_status(&self, status: StatusCode, detail: Option<&Value>) -> Envelope {
        let code = self.catalog.code_for_status(status);
        let message = match status {
            StatusCode::BAD_REQUEST => detail
                .and_then(detail_text)
                .unwrap_or_else(|| self.catalog.bad_request.clone()),
            _ => self.catalog.message_for_status(status).to_string(),
        };

        Envelope::failure(code, message, Value::Null)
    }

    /// Translate a tenant fault. These carry no transport status of their
    /// own, so the code comes from the fault kind.
    pub fn translate_fault(&self, fault: &TenantFault) -> Envelope {
        let (code, default) = match fault {
            TenantFault::NotFound { .. } => (
                self.catalog.code_for_status(StatusCode::NOT_FOUND),
                &self.catalog.tenant_not_found,
            ),
            TenantFault::Inactive { .. } => (
                self.catalog.code_for_status(StatusCode::FORBIDDEN),
                &self.catalog.tenant_inactive,
            ),
            TenantFault::QuotaExceeded { .. } => (codes::QUOTA_EXCEEDED, &self.catalog.quota_exceeded),
        };

        let message = fault
            .custom_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(default.as_str());

        tracing::warn!(code, "Tenant fault: {}", message);
        Envelope::failure(code, message, Value::Null)
    }
}
