use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::db::Store;
use crate::error::Result;
use crate::models::{Client, NewClient, NewProject, Project, ProjectPatch};

const CLIENT_COLUMNS: &str = "id, name, email, phone";
const PROJECT_COLUMNS: &str = "id, name, description, status, client_id";

/// Postgres-backed store
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(config.database_url())
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an already-open pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the clients and projects tables if they are missing
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!().run(self.get_pool()).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for Database {
    // Client operations
    async fn find_clients(&self) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(&format!("SELECT {CLIENT_COLUMNS} FROM clients"))
            .fetch_all(self.get_pool())
            .await?;

        Ok(clients)
    }

    async fn find_client(&self, id: Uuid) -> Result<Option<Client>> {
        debug!(%id, "find client");
        let client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(client)
    }

    async fn insert_client(&self, client: NewClient) -> Result<Client> {
        let client = sqlx::query_as::<_, Client>(&format!(
            r#"
            INSERT INTO clients (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(client.name)
        .bind(client.email)
        .bind(client.phone)
        .fetch_one(self.get_pool())
        .await?;
        debug!(id = %client.id, "inserted client");

        Ok(client)
    }

    async fn delete_client(&self, id: Uuid) -> Result<Option<Client>> {
        debug!(%id, "delete client");
        let client = sqlx::query_as::<_, Client>(&format!(
            "DELETE FROM clients WHERE id = $1 RETURNING {CLIENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(client)
    }

    // Project operations
    async fn find_projects(&self) -> Result<Vec<Project>> {
        let projects =
            sqlx::query_as::<_, Project>(&format!("SELECT {PROJECT_COLUMNS} FROM projects"))
                .fetch_all(self.get_pool())
                .await?;

        Ok(projects)
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<Project>> {
        debug!(%id, "find project");
        let project = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(project)
    }

    async fn insert_project(&self, project: NewProject) -> Result<Project> {
        let project = sqlx::query_as::<_, Project>(&format!(
            r#"
            INSERT INTO projects (name, description, status, client_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(project.name)
        .bind(project.description)
        .bind(project.status)
        .bind(project.client_id)
        .fetch_one(self.get_pool())
        .await?;
        debug!(id = %project.id, client_id = %project.client_id, "inserted project");

        Ok(project)
    }

    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>> {
        debug!(%id, "delete project");
        let project = sqlx::query_as::<_, Project>(&format!(
            "DELETE FROM projects WHERE id = $1 RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(project)
    }

    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Option<Project>> {
        debug!(%id, "update project");
        if patch.is_empty() {
            return self.find_project(id).await;
        }

        // NULL parameters keep the stored column
        let project = sqlx::query_as::<_, Project>(&format!(
            r#"
            UPDATE projects
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status)
            WHERE id = $1
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.status)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(project)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
