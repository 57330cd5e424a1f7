pub mod directory;
pub mod quota;
pub mod tenant_service;

pub use directory::{DirectoryError, InMemoryTenantDirectory, TenantDirectory, TenantRecord};
pub use quota::{QuotaTracker, QuotaUsage};
pub use tenant_service::{NewTenant, TenantPage, TenantService, TenantUpdate};
