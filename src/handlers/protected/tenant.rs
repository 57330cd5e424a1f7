// handlers/protected/tenant.rs - GET /api/tenant handler

use axum::{extract::State, Extension};
use serde::Serialize;

use crate::middleware::{ApiResponse, ValidatedTenant};
use crate::services::{QuotaUsage, TenantRecord};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CurrentTenant {
    #[serde(flatten)]
    pub tenant: TenantRecord,
    pub quota: QuotaUsage,
}

/// GET /api/tenant - Tenant of the caller with today's quota usage.
/// The quota already includes this request.
pub async fn current_tenant(
    State(state): State<AppState>,
    Extension(ValidatedTenant(tenant)): Extension<ValidatedTenant>,
) -> ApiResponse<CurrentTenant> {
    let quota = state.quota.usage(&tenant);
    ApiResponse::success(CurrentTenant { tenant, quota })
}
