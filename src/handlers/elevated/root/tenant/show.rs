// handlers/elevated/root/tenant/show.rs - GET /api/root/tenant/:name handler

use axum::extract::{Path, State};
use serde::Serialize;

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{QuotaUsage, TenantRecord};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TenantDetails {
    #[serde(flatten)]
    pub tenant: TenantRecord,
    pub quota: QuotaUsage,
}

pub async fn tenant_show(State(state): State<AppState>, Path(name): Path<String>) -> ApiResult<TenantDetails> {
    let tenant = state.tenants.find(&name).await?;
    let quota = state.quota.usage(&tenant);
    Ok(ApiResponse::success(TenantDetails { tenant, quota }))
}
