// handlers/elevated/root/tenant/mod.rs - Tenant management handlers
//
// Administrative operations over the tenant directory.
// Requires root-level JWT tokens.

pub mod create; // POST /api/root/tenant
pub mod list;   // GET /api/root/tenant
pub mod show;   // GET /api/root/tenant/:name
pub mod update; // PATCH /api/root/tenant/:name

pub use create::tenant_create;
pub use list::tenant_list;
pub use show::tenant_show;
pub use update::tenant_update;
