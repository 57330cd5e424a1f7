// handlers/elevated/root/tenant/update.rs - PATCH /api/root/tenant/:name handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{TenantRecord, TenantUpdate};
use crate::state::AppState;

/// PATCH /api/root/tenant/:name - Change display name, activation or quota
///
/// Expected Input (all fields optional, `daily_quota: null` removes the quota):
/// ```json
/// { "display_name": "Acme Corp", "is_active": false, "daily_quota": 500 }
/// ```
pub async fn tenant_update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(update): Json<TenantUpdate>,
) -> ApiResult<TenantRecord> {
    let tenant = state.tenants.update(&name, update).await?;
    Ok(ApiResponse::success(tenant))
}
