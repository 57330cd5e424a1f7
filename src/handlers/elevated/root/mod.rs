// handlers/elevated/root/mod.rs - Root administrative handlers

pub mod tenant; // Multi-tenant management operations

pub use tenant::*;
