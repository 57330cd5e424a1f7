pub mod auth;
pub mod cli;
pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use envelope::{Envelope, ErrorCatalog, ErrorTranslator, ResponseNormalizer};
pub use error::{ApiError, TenantFault};
pub use routes::app;
pub use state::AppState;
