mod client;
mod project;

pub use client::{Client, NewClient};
pub use project::{NewProject, Project, ProjectPatch, DEFAULT_PROJECT_STATUS, PROJECT_STATUSES};
