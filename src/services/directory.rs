use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantRecord {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub is_active: bool,
    pub daily_quota: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TenantRecord {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            display_name: display_name.into(),
            is_active: true,
            daily_quota: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Tenant already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid tenant name: {0}")]
    InvalidName(String),
    #[error("Tenant directory unavailable: {0}")]
    Unavailable(String),
}

/// Storage behind the tenant registry.
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    async fn get(&self, name: &str) -> Result<Option<TenantRecord>, DirectoryError>;

    /// All tenants ordered by name.
    async fn list(&self) -> Result<Vec<TenantRecord>, DirectoryError>;

    async fn insert(&self, record: TenantRecord) -> Result<(), DirectoryError>;

    /// Overwrite an existing record, keyed by name.
    async fn replace(&self, record: TenantRecord) -> Result<(), DirectoryError>;
}

/// Tenant entry as written in the registry YAML file.
#[derive(Debug, Clone, Deserialize)]
struct TenantSeed {
    name: String,
    display_name: Option<String>,
    #[serde(default = "default_active")]
    is_active: bool,
    daily_quota: Option<u32>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    tenants: Vec<TenantSeed>,
}

#[derive(Debug, Default)]
pub struct InMemoryTenantDirectory {
    tenants: RwLock<BTreeMap<String, TenantRecord>>,
}

impl InMemoryTenantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = TenantRecord>) -> Self {
        let tenants = records.into_iter().map(|r| (r.name.clone(), r)).collect();
        Self {
            tenants: RwLock::new(tenants),
        }
    }

    /// Parse a registry document:
    ///
    /// ```yaml
    /// tenants:
    ///   - name: acme
    ///     display_name: Acme Corp
    ///     daily_quota: 1000
    ///   - name: globex
    ///     is_active: false
    /// ```
    pub fn from_yaml_str(source: &str) -> anyhow::Result<Self> {
        let file: RegistryFile = serde_yaml::from_str(source).context("invalid tenant registry YAML")?;

        let records = file.tenants.into_iter().map(|seed| {
            let display_name = seed.display_name.unwrap_or_else(|| seed.name.clone());
            TenantRecord {
                is_active: seed.is_active,
                daily_quota: seed.daily_quota,
                ..TenantRecord::new(seed.name, display_name)
            }
        });

        Ok(Self::from_records(records))
    }

    pub fn load_yaml(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tenant registry {}", path.display()))?;
        Self::from_yaml_str(&source)
    }
}

#[async_trait]
impl TenantDirectory for InMemoryTenantDirectory {
    async fn get(&self, name: &str) -> Result<Option<TenantRecord>, DirectoryError> {
        Ok(self.tenants.read().await.get(name).cloned())
    }

    async fn list(&self) -> Result<Vec<TenantRecord>, DirectoryError> {
        Ok(self.tenants.read().await.values().cloned().collect())
    }

    async fn insert(&self, record: TenantRecord) -> Result<(), DirectoryError> {
        let mut tenants = self.tenants.write().await;
        if tenants.contains_key(&record.name) {
            return Err(DirectoryError::AlreadyExists(record.name));
        }
        tenants.insert(record.name.clone(), record);
        Ok(())
    }

    async fn replace(&self, record: TenantRecord) -> Result<(), DirectoryError> {
        self.tenants.write().await.insert(record.name.clone(), record);
        Ok(())
    }
}
