use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::services::TenantRecord;
use crate::state::AppState;

/// Tenant the request runs under, injected by `validate_tenant_middleware`
#[derive(Clone, Debug)]
pub struct ValidatedTenant(pub TenantRecord);

/// Middleware that validates the tenant from JWT claims against the tenant directory.
/// Ensures the tenant exists and is active.
pub async fn validate_tenant_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Get AuthUser from previous JWT middleware
    let tenant_name = request
        .extensions()
        .get::<AuthUser>()
        .map(|user| user.tenant.clone())
        .ok_or_else(|| ApiError::unauthorized("JWT authentication required before tenant validation"))?;

    let tenant = state.tenants.resolve_active(&tenant_name).await?;
    request.extensions_mut().insert(ValidatedTenant(tenant));

    Ok(next.run(request).await)
}

/// Counts the request against the tenant's daily quota. Must run after
/// `validate_tenant_middleware`.
pub async fn quota_middleware(State(state): State<AppState>, request: Request, next: Next) -> Result<Response, ApiError> {
    let ValidatedTenant(tenant) = request
        .extensions()
        .get::<ValidatedTenant>()
        .ok_or_else(|| ApiError::internal_server_error("Quota check ran before tenant validation"))?;

    let usage = state.quota.consume(tenant)?;
    tracing::debug!("Tenant '{}' quota usage: {}/{:?}", tenant.name, usage.used, usage.limit);

    Ok(next.run(request).await)
}
