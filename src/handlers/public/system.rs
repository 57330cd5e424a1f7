// handlers/public/system.rs - GET / and GET /health handlers

use axum::extract::State;
use chrono::Utc;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET / - Service description
pub async fn root() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "name": "Tenant Admin API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "auth": "/api/auth/whoami (protected)",
            "tenant": "/api/tenant (protected)",
            "root": "/api/root/tenant[/:name] (restricted, requires root access)",
        }
    }))
}

/// GET /health - Liveness plus tenant directory reachability
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    let tenants = state.tenants.list(Some(1), Some(1)).await?;

    Ok(ApiResponse::success(json!({
        "status": "ok",
        "timestamp": Utc::now(),
        "environment": state.config.environment,
        "tenants": tenants.pagination.total,
    })))
}
