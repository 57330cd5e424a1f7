use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::directory::TenantRecord;
use crate::error::TenantFault;

pub const DAILY_QUOTA_MESSAGE: &str = "超出每日配额";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaUsage {
    pub used: u32,
    /// `None` when the tenant has no quota.
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
struct DailyCount {
    day: NaiveDate,
    count: u32,
}

/// Per-tenant request counter that resets at UTC midnight.
#[derive(Debug, Clone, Default)]
pub struct QuotaTracker {
    default_daily_quota: Option<u32>,
    counts: Arc<Mutex<HashMap<String, DailyCount>>>,
}

impl QuotaTracker {
    pub fn new(default_daily_quota: Option<u32>) -> Self {
        Self {
            default_daily_quota,
            counts: Arc::default(),
        }
    }

    pub fn limit_for(&self, tenant: &TenantRecord) -> Option<u32> {
        tenant.daily_quota.or(self.default_daily_quota)
    }

    /// Count one request against today's quota.
    pub fn consume(&self, tenant: &TenantRecord) -> Result<QuotaUsage, TenantFault> {
        self.consume_on(tenant, Utc::now().date_naive())
    }

    pub fn consume_on(&self, tenant: &TenantRecord, day: NaiveDate) -> Result<QuotaUsage, TenantFault> {
        let limit = self.limit_for(tenant);
        let mut counts = self.counts.lock().unwrap_or_else(|e| e.into_inner());
        let entry = counts
            .entry(tenant.name.clone())
            .or_insert(DailyCount { day, count: 0 });

        if entry.day != day {
            *entry = DailyCount { day, count: 0 };
        }

        if let Some(limit) = limit {
            if entry.count >= limit {
                tracing::warn!("Tenant '{}' exhausted its daily quota of {}", tenant.name, limit);
                return Err(TenantFault::quota_exceeded(DAILY_QUOTA_MESSAGE));
            }
        }

        entry.count += 1;
        Ok(QuotaUsage { used: entry.count, limit })
    }

    /// Requests counted for `tenant` today.
    pub fn usage(&self, tenant: &TenantRecord) -> QuotaUsage {
        self.usage_on(tenant, Utc::now().date_naive())
    }

    pub fn usage_on(&self, tenant: &TenantRecord, day: NaiveDate) -> QuotaUsage {
        let counts = self.counts.lock().unwrap_or_else(|e| e.into_inner());
        let used = counts
            .get(&tenant.name)
            .filter(|c| c.day == day)
            .map_or(0, |c| c.count);
        QuotaUsage {
            used,
            limit: self.limit_for(tenant),
        }
    }
}
