use async_graphql::*;
use tracing::info;

use crate::db::parse_id;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Client, Project, ProjectStatus};
use crate::models::{NewClient, NewProject, ProjectPatch};

#[derive(Default)]
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a new client
    async fn add_client(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: String,
    ) -> Result<Client> {
        let context = ctx.data::<GraphQLContext>()?;
        let client = context
            .store
            .insert_client(NewClient { name, email, phone })
            .await
            .map_err(|e| e.extend())?;
        info!(id = %client.id, "client added");

        Ok(Client::from(client))
    }

    /// Delete a client. Its projects are kept and keep pointing at the id.
    async fn delete_client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let client = context.store.delete_client(id).await.map_err(|e| e.extend())?;

        Ok(client.map(Client::from))
    }

    /// Create a new project
    async fn add_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        status: Option<ProjectStatus>,
        client_id: ID,
    ) -> Result<Project> {
        let context = ctx.data::<GraphQLContext>()?;
        let client_id = parse_id(&client_id).map_err(|e| e.extend())?;
        let status = match status {
            Some(status) => status.label().to_string(),
            None => context.default_project_status.clone(),
        };
        let project = context
            .store
            .insert_project(NewProject {
                name,
                description,
                status,
                client_id,
            })
            .await
            .map_err(|e| e.extend())?;
        info!(id = %project.id, "project added");

        Ok(Project::from(project))
    }

    /// Delete a project
    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let project = context.store.delete_project(id).await.map_err(|e| e.extend())?;

        Ok(project.map(Project::from))
    }

    /// Update the supplied fields of a project; omitted fields are unchanged
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatus>,
    ) -> Result<Option<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let patch = ProjectPatch {
            name,
            description,
            status: status.map(|s| s.label().to_string()),
        };
        let project = context
            .store
            .update_project(id, patch)
            .await
            .map_err(|e| e.extend())?;

        Ok(project.map(Project::from))
    }
}
