mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::models::{Client, NewClient, NewProject, Project, ProjectPatch};

pub use memory::MemoryStore;
pub use postgres::Database;

/// Document store operations the API is built on.
///
/// Each method maps to exactly one driver call. Lookups and deletes of an
/// unknown id return `Ok(None)`; only driver failures are errors.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_clients(&self) -> Result<Vec<Client>>;

    async fn find_client(&self, id: Uuid) -> Result<Option<Client>>;

    /// Persist a new client and return it with its generated id.
    async fn insert_client(&self, client: NewClient) -> Result<Client>;

    /// Remove a client and return the removed record. Projects that
    /// reference it are left as they are.
    async fn delete_client(&self, id: Uuid) -> Result<Option<Client>>;

    async fn find_projects(&self) -> Result<Vec<Project>>;

    async fn find_project(&self, id: Uuid) -> Result<Option<Project>>;

    async fn insert_project(&self, project: NewProject) -> Result<Project>;

    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>>;

    /// Apply `patch` and return the project as stored afterwards.
    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Option<Project>>;

    /// Release the underlying connection.
    async fn close(&self) {}
}

/// Parse an API-level identifier into a store id.
pub fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// Open the store selected by the configured database URL
pub async fn init(config: &Config) -> anyhow::Result<Arc<dyn Store>> {
    if config.uses_memory_store() {
        info!("Using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let db = Database::new(config).await?;
    db.migrate().await?;
    info!("Database connection established");

    Ok(Arc::new(db))
}
