use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Business status codes. Four digits, decoupled from the transport status.
pub type BusinessCode = i64;

pub const SUCCESS: BusinessCode = 2000;
pub const BAD_REQUEST: BusinessCode = 4000;
pub const UNAUTHORIZED: BusinessCode = 4001;
pub const FORBIDDEN: BusinessCode = 4003;
pub const NOT_FOUND: BusinessCode = 4004;
pub const QUOTA_EXCEEDED: BusinessCode = 4029;
pub const SERVER_ERROR: BusinessCode = 5000;

/// Status → business code / default message table.
///
/// Built once at startup and shared by the translator and the normalizer.
/// Nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCatalog {
    pub success: String,
    pub bad_request: String,
    pub unauthorized: String,
    pub forbidden: String,
    pub not_found: String,
    pub client_error: String,
    pub server_error: String,
    pub tenant_not_found: String,
    pub tenant_inactive: String,
    pub quota_exceeded: String,
}

impl Default for ErrorCatalog {
    fn default() -> Self {
        Self {
            success: "操作成功".to_string(),
            bad_request: "请求参数错误".to_string(),
            unauthorized: "认证失败，请登录".to_string(),
            forbidden: "您没有执行该操作的权限".to_string(),
            not_found: "请求的资源不存在".to_string(),
            client_error: "请求错误".to_string(),
            server_error: "服务器内部错误".to_string(),
            tenant_not_found: "租户不存在".to_string(),
            tenant_inactive: "租户未激活或已被禁用".to_string(),
            quota_exceeded: "配额超限".to_string(),
        }
    }
}

impl ErrorCatalog {
    /// True for every status at or above 400, matching `code_for_status`.
    pub fn is_failure(&self, status: StatusCode) -> bool {
        status.as_u16() >= 400
    }

    /// Business code for a transport status.
    ///
    /// Unlisted 4xx statuses map to `4000 + status % 1000` (418 → 4418).
    pub fn code_for_status(&self, status: StatusCode) -> BusinessCode {
        match status.as_u16() {
            400 => BAD_REQUEST,
            401 => UNAUTHORIZED,
            403 => FORBIDDEN,
            404 => NOT_FOUND,
            s @ 402..=499 => 4000 + BusinessCode::from(s % 1000),
            s if s >= 500 => SERVER_ERROR,
            _ => SUCCESS,
        }
    }

    /// Default message for a transport status when nothing better is known.
    pub fn message_for_status(&self, status: StatusCode) -> &str {
        match status.as_u16() {
            400 => &self.bad_request,
            401 => &self.unauthorized,
            403 => &self.forbidden,
            404 => &self.not_found,
            402..=499 => &self.client_error,
            s if s >= 500 => &self.server_error,
            _ => &self.success,
        }
    }
}
