use std::sync::Arc;

use anyhow::Context;
use tenant_admin_api::{
    config,
    services::{InMemoryTenantDirectory, TenantDirectory},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_SECRET, TENANT_REGISTRY_PATH, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tenant_admin_api=info,tower_http=info".into()),
        )
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config().clone();
    tracing::info!("Starting Tenant Admin API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        anyhow::bail!("JWT_SECRET must be set outside development");
    }

    let directory: Arc<dyn TenantDirectory> = match &config.tenants.registry_path {
        Some(path) => {
            let directory = InMemoryTenantDirectory::load_yaml(path)?;
            tracing::info!("Loaded tenant registry from {}", path.display());
            Arc::new(directory)
        }
        None => {
            tracing::warn!("No TENANT_REGISTRY_PATH configured, starting with an empty tenant directory");
            Arc::new(InMemoryTenantDirectory::new())
        }
    };

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let app = tenant_admin_api::app(AppState::new(config, directory));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Tenant Admin API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
