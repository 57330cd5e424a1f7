pub mod auth;
pub mod envelope;
pub mod response;
pub mod validate_tenant;

pub use auth::{jwt_auth_middleware, require_root_middleware, AuthUser};
pub use envelope::envelope_middleware;
pub use response::{ApiResponse, ApiResult};
pub use validate_tenant::{quota_middleware, validate_tenant_middleware, ValidatedTenant};
