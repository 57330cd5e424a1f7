// handlers/elevated/root/tenant/list.rs - GET /api/root/tenant handler

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::TenantPage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// GET /api/root/tenant?page=1&page_size=20
///
/// `data` is `{"pagination": {...}, "results": [...]}`, passed through the
/// envelope untouched.
pub async fn tenant_list(State(state): State<AppState>, Query(query): Query<ListQuery>) -> ApiResult<TenantPage> {
    let page = state.tenants.list(query.page, query.page_size).await?;
    Ok(ApiResponse::success(page))
}
