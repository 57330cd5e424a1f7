use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::directory::{DirectoryError, TenantDirectory, TenantRecord};
use crate::error::{ApiError, TenantFault};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct NewTenant {
    pub name: String,
    pub display_name: Option<String>,
    pub daily_quota: Option<u32>,
}

/// Partial update. `daily_quota: Some(None)` clears the quota.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantUpdate {
    pub display_name: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default, with = "double_option")]
    pub daily_quota: Option<Option<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// One page of tenants, serialized as `{"pagination": {...}, "results": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantPage {
    pub pagination: Pagination,
    pub results: Vec<TenantRecord>,
}

#[derive(Clone)]
pub struct TenantService {
    directory: Arc<dyn TenantDirectory>,
}

impl TenantService {
    pub fn new(directory: Arc<dyn TenantDirectory>) -> Self {
        Self { directory }
    }

    /// Look up the tenant a request runs under. Missing and disabled
    /// tenants surface as tenant faults.
    pub async fn resolve_active(&self, name: &str) -> Result<TenantRecord, ApiError> {
        let tenant = self.find(name).await?;

        if !tenant.is_active {
            tracing::warn!("Tenant '{}' is inactive", name);
            return Err(TenantFault::inactive().into());
        }

        tracing::debug!("Tenant resolved: {} ({})", tenant.name, tenant.id);
        Ok(tenant)
    }

    pub async fn find(&self, name: &str) -> Result<TenantRecord, ApiError> {
        match self.directory.get(name).await? {
            Some(tenant) => Ok(tenant),
            None => {
                tracing::warn!("Tenant '{}' not found", name);
                Err(TenantFault::not_found().into())
            }
        }
    }

    /// Paginated listing. Pages are 1-based; out-of-range pages come back
    /// empty with the real totals.
    pub async fn list(&self, page: Option<usize>, page_size: Option<usize>) -> Result<TenantPage, ApiError> {
        let page = page.unwrap_or(1).max(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let tenants = self.directory.list().await?;
        let total = tenants.len();
        let results = tenants
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        Ok(TenantPage {
            pagination: Pagination {
                page,
                page_size,
                total,
                total_pages: total.div_ceil(page_size),
            },
            results,
        })
    }

    pub async fn create(&self, request: NewTenant) -> Result<TenantRecord, ApiError> {
        validate_tenant_name(&request.name)?;

        let display_name = request
            .display_name
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| request.name.clone());

        let record = TenantRecord {
            daily_quota: request.daily_quota,
            ..TenantRecord::new(request.name, display_name)
        };

        self.directory.insert(record.clone()).await?;
        tracing::info!("Tenant created: {} ({})", record.name, record.id);
        Ok(record)
    }

    pub async fn update(&self, name: &str, update: TenantUpdate) -> Result<TenantRecord, ApiError> {
        let mut tenant = self.find(name).await?;

        if let Some(display_name) = update.display_name {
            if display_name.trim().is_empty() {
                return Err(ApiError::bad_request("display_name cannot be empty"));
            }
            tenant.display_name = display_name;
        }
        if let Some(is_active) = update.is_active {
            tenant.is_active = is_active;
        }
        if let Some(daily_quota) = update.daily_quota {
            tenant.daily_quota = daily_quota;
        }
        tenant.updated_at = Utc::now();

        self.directory.replace(tenant.clone()).await?;
        tracing::info!("Tenant updated: {} (active: {})", tenant.name, tenant.is_active);
        Ok(tenant)
    }
}

/// Validate tenant name follows rules
fn validate_tenant_name(name: &str) -> Result<(), DirectoryError> {
    if name.chars().count() < 2 {
        return Err(DirectoryError::InvalidName("Tenant name must be at least 2 characters".to_string()));
    }

    if name.chars().count() > 100 {
        return Err(DirectoryError::InvalidName("Tenant name must be less than 100 characters".to_string()));
    }

    // Only allow alphanumeric, hyphens, and underscores
    if !name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return Err(DirectoryError::InvalidName(
            "Tenant name can only contain letters, numbers, hyphens, and underscores".to_string(),
        ));
    }

    Ok(())
}

// Distinguishes an absent field from an explicit `null`.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
