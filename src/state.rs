use std::sync::Arc;

use crate::config::{AppConfig, StoreBackend};
use crate::store::{EntityStore, MemoryStore, SqliteStore};

/// Shared application state. Built once at startup and handed to the router;
/// no module-level store handle exists anywhere.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store: Arc<dyn EntityStore> = match config.backend {
            StoreBackend::Sqlite => Arc::new(SqliteStore::connect(&config.database_url).await?),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };
        Ok(Self { store, config })
    }

    pub fn from_parts(store: Arc<dyn EntityStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// Memory-backed state for tests.
    pub fn in_memory() -> Self {
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            backend: StoreBackend::Memory,
        });
        Self {
            store: Arc::new(MemoryStore::new()),
            config,
        }
    }
}
