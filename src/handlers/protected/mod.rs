// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Security Level: JWT Authentication Required
// Route Prefix: /api/*
// Middleware: JWT validation → tenant validation → daily quota

pub mod session;
pub mod tenant;

pub use session::whoami;
pub use tenant::current_tenant;
