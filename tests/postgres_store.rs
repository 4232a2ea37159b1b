//! Postgres store round trip
//!
//! Needs a live database: `DATABASE_URL=postgres://... cargo test -- --ignored`

use anyhow::Result;
use project_tracker::db::{Database, Store};
use project_tracker::models::{NewClient, NewProject, ProjectPatch};
use sqlx::postgres::PgPoolOptions;

#[tokio::test]
#[ignore]
async fn test_postgres_crud_round_trip() -> Result<()> {
    let url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new().max_connections(1).connect(&url).await?;
    let db = Database::from_pool(pool);
    db.migrate().await?;

    let client = db
        .insert_client(NewClient {
            name: "Acme".to_string(),
            email: "a@acme.io".to_string(),
            phone: "555-0100".to_string(),
        })
        .await?;
    assert_eq!(db.find_client(client.id).await?, Some(client.clone()));

    let project = db
        .insert_project(NewProject {
            name: "Website".to_string(),
            description: "Redesign".to_string(),
            status: "Not Started".to_string(),
            client_id: client.id,
        })
        .await?;

    let updated = db
        .update_project(
            project.id,
            ProjectPatch {
                status: Some("Completed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .expect("project exists");
    assert_eq!(updated.status, "Completed");
    assert_eq!(updated.name, project.name);
    assert_eq!(updated.description, project.description);
    assert_eq!(updated.client_id, client.id);

    assert_eq!(db.delete_client(client.id).await?, Some(client.clone()));
    assert_eq!(db.find_client(client.id).await?, None);
    assert!(db.find_project(project.id).await?.is_some());

    assert!(db.delete_project(project.id).await?.is_some());
    assert_eq!(db.delete_project(project.id).await?, None);

    db.close().await;
    Ok(())
}
