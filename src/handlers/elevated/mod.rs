// handlers/elevated/mod.rs - Elevated handlers (Root JWT authentication required)
//
// Security Level: Root JWT Authentication Required
// Route Prefix: /api/root/*
// Middleware: JWT validation → root access check

pub mod root;

pub use root::*;
