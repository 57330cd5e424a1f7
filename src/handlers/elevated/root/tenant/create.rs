// handlers/elevated/root/tenant/create.rs - POST /api/root/tenant handler

use axum::{extract::State, Json};

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{NewTenant, TenantRecord};
use crate::state::AppState;

/// POST /api/root/tenant - Register a new tenant
///
/// Expected Input:
/// ```json
/// { "name": "acme", "display_name": "Acme Corp", "daily_quota": 1000 }
/// ```
///
/// Invalid names yield 400 / 4000 with the field errors as `data`;
/// duplicates yield 409 / 4409.
pub async fn tenant_create(State(state): State<AppState>, Json(request): Json<NewTenant>) -> ApiResult<TenantRecord> {
    let tenant = state.tenants.create(request).await?;
    Ok(ApiResponse::created(tenant))
}
