use std::sync::Arc;

use crate::config::AppConfig;
use crate::envelope::{ErrorCatalog, ErrorTranslator, ResponseNormalizer};
use crate::services::{QuotaTracker, TenantDirectory, TenantService};

/// Shared state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub translator: ErrorTranslator,
    pub normalizer: ResponseNormalizer,
    pub tenants: TenantService,
    pub quota: QuotaTracker,
}

impl AppState {
    pub fn new(config: AppConfig, directory: Arc<dyn TenantDirectory>) -> Self {
        Self::with_catalog(config, directory, ErrorCatalog::default())
    }

    pub fn with_catalog(config: AppConfig, directory: Arc<dyn TenantDirectory>, catalog: ErrorCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let quota = QuotaTracker::new(config.tenants.default_daily_quota);

        Self {
            translator: ErrorTranslator::new(catalog.clone()),
            normalizer: ResponseNormalizer::new(catalog),
            tenants: TenantService::new(directory),
            quota,
            config: Arc::new(config),
        }
    }
}
