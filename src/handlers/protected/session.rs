// handlers/protected/session.rs - GET /api/auth/whoami handler

use axum::Extension;
use serde::Serialize;
use uuid::Uuid;

use crate::middleware::{ApiResponse, AuthUser, ValidatedTenant};

#[derive(Debug, Serialize)]
pub struct WhoAmI {
    pub user_id: Uuid,
    pub user: String,
    pub access: String,
    pub tenant: String,
    pub tenant_display_name: String,
}

/// GET /api/auth/whoami - Current user as seen through the JWT
///
/// Expected Output:
/// ```json
/// {
///   "success": true,
///   "code": 2000,
///   "message": "操作成功",
///   "data": { "user_id": "...", "user": "alice", "access": "full", "tenant": "acme", "tenant_display_name": "Acme" }
/// }
/// ```
pub async fn whoami(
    Extension(user): Extension<AuthUser>,
    Extension(ValidatedTenant(tenant)): Extension<ValidatedTenant>,
) -> ApiResponse<WhoAmI> {
    ApiResponse::success(WhoAmI {
        user_id: user.user_id,
        user: user.user,
        access: user.access,
        tenant: tenant.name,
        tenant_display_name: tenant.display_name,
    })
}
