use async_graphql::*;

use crate::db::parse_id;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Client, Project};

pub struct Query;

#[Object(name = "RootQueryType")]
impl Query {
    /// Get all clients
    async fn clients(&self, ctx: &Context<'_>) -> Result<Vec<Client>> {
        let context = ctx.data::<GraphQLContext>()?;
        let clients = context.store.find_clients().await.map_err(|e| e.extend())?;

        Ok(clients.into_iter().map(Client::from).collect())
    }

    /// Get a specific client by ID
    async fn client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let client = context.store.find_client(id).await.map_err(|e| e.extend())?;

        Ok(client.map(Client::from))
    }

    /// Get all projects
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let projects = context.store.find_projects().await.map_err(|e| e.extend())?;

        Ok(projects.into_iter().map(Project::from).collect())
    }

    /// Get a specific project by ID
    async fn project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let project = context.store.find_project(id).await.map_err(|e| e.extend())?;

        Ok(project.map(Project::from))
    }
}
