use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::db::Store;
use crate::error::Result;
use crate::models::{Client, NewClient, NewProject, Project, ProjectPatch};

/// In-process store. Records are kept in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    clients: RwLock<Vec<Client>>,
    projects: RwLock<Vec<Project>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.read().await.clone())
    }

    async fn find_client(&self, id: Uuid) -> Result<Option<Client>> {
        debug!(%id, "find client");
        Ok(self.clients.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_client(&self, client: NewClient) -> Result<Client> {
        let client = client.into_client(Uuid::new_v4());
        debug!(id = %client.id, "inserted client");
        self.clients.write().await.push(client.clone());
        Ok(client)
    }

    async fn delete_client(&self, id: Uuid) -> Result<Option<Client>> {
        debug!(%id, "delete client");
        let mut clients = self.clients.write().await;
        let removed = clients
            .iter()
            .position(|c| c.id == id)
            .map(|idx| clients.remove(idx));
        Ok(removed)
    }

    async fn find_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.read().await.clone())
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<Project>> {
        debug!(%id, "find project");
        Ok(self.projects.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_project(&self, project: NewProject) -> Result<Project> {
        let project = project.into_project(Uuid::new_v4());
        debug!(id = %project.id, client_id = %project.client_id, "inserted project");
        self.projects.write().await.push(project.clone());
        Ok(project)
    }

    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>> {
        debug!(%id, "delete project");
        let mut projects = self.projects.write().await;
        let removed = projects
            .iter()
            .position(|p| p.id == id)
            .map(|idx| projects.remove(idx));
        Ok(removed)
    }

    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Option<Project>> {
        debug!(%id, "update project");
        let mut projects = self.projects.write().await;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch.apply(project);
        Ok(Some(project.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> NewClient {
        NewClient {
            name: "Acme".to_string(),
            email: "a@acme.io".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    fn website(client_id: Uuid) -> NewProject {
        NewProject {
            name: "Website".to_string(),
            description: "Redesign".to_string(),
            status: "In progress".to_string(),
            client_id,
        }
    }

    #[tokio::test]
    async fn insert_generates_distinct_ids() {
        let store = MemoryStore::new();
        let a = store.insert_client(acme()).await.unwrap();
        let b = store.insert_client(acme()).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.find_clients().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn delete_returns_snapshot_then_none() {
        let store = MemoryStore::new();
        let client = store.insert_client(acme()).await.unwrap();

        assert_eq!(store.delete_client(client.id).await.unwrap(), Some(client.clone()));
        assert_eq!(store.delete_client(client.id).await.unwrap(), None);
        assert_eq!(store.find_client(client.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn deleting_a_client_keeps_its_projects() {
        let store = MemoryStore::new();
        let client = store.insert_client(acme()).await.unwrap();
        let project = store.insert_project(website(client.id)).await.unwrap();

        store.delete_client(client.id).await.unwrap();

        let kept = store.find_project(project.id).await.unwrap().unwrap();
        assert_eq!(kept.client_id, client.id);
    }

    #[tokio::test]
    async fn update_unknown_project_is_none() {
        let store = MemoryStore::new();
        let patch = ProjectPatch {
            name: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(store.update_project(Uuid::new_v4(), patch).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_applies_patch_in_place() {
        let store = MemoryStore::new();
        let project = store.insert_project(website(Uuid::new_v4())).await.unwrap();

        let updated = store
            .update_project(
                project.id,
                ProjectPatch {
                    description: Some("Rebuild".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.description, "Rebuild");
        assert_eq!(updated.name, project.name);
        assert_eq!(store.find_project(project.id).await.unwrap(), Some(updated));
    }
}
