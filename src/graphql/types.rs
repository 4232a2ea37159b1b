use async_graphql::*;
use uuid::Uuid;

use crate::graphql::context::GraphQLContext;
use crate::models;

#[derive(SimpleObject, Clone, Debug)]
pub struct Client {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<models::Client> for Client {
    fn from(model: models::Client) -> Self {
        Self {
            id: ID(model.id.to_string()),
            name: model.name,
            email: model.email,
            phone: model.phone,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Project {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub status: String,
    #[graphql(skip)]
    pub client_id: Uuid,
}

impl From<models::Project> for Project {
    fn from(model: models::Project) -> Self {
        Self {
            id: ID(model.id.to_string()),
            name: model.name,
            description: model.description,
            status: model.status,
            client_id: model.client_id,
        }
    }
}

#[ComplexObject]
impl Project {
    /// The client this project belongs to; null once that client is deleted
    async fn client(&self, ctx: &Context<'_>) -> Result<Option<Client>> {
        let context = ctx.data::<GraphQLContext>()?;
        let client = context
            .store
            .find_client(self.client_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(client.map(Client::from))
    }
}

/// Accepted values for a project's status argument
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ProjectStatus {
    #[graphql(name = "new")]
    New,
    #[graphql(name = "progress")]
    Progress,
    #[graphql(name = "completed")]
    Completed,
}

impl ProjectStatus {
    /// Label written to the store
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::New => models::PROJECT_STATUSES[0],
            ProjectStatus::Progress => models::PROJECT_STATUSES[1],
            ProjectStatus::Completed => models::PROJECT_STATUSES[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_canonical_values() {
        assert_eq!(ProjectStatus::New.label(), "Not started");
        assert_eq!(ProjectStatus::Progress.label(), "In progress");
        assert_eq!(ProjectStatus::Completed.label(), "Completed");
    }
}
