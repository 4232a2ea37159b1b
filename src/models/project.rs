use uuid::Uuid;

/// Canonical status labels, in workflow order.
pub const PROJECT_STATUSES: [&str; 3] = ["Not started", "In progress", "Completed"];

/// Stored when `addProject` omits a status. Differs in case from
/// `PROJECT_STATUSES[0]`; existing data carries this exact literal.
pub const DEFAULT_PROJECT_STATUS: &str = "Not Started";

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: String,
    pub client_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: String,
    pub client_id: Uuid,
}

impl NewProject {
    pub fn into_project(self, id: Uuid) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            client_id: self.client_id,
        }
    }
}

/// Partial update for a project. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.status.is_none()
    }

    pub fn apply(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project {
            id: Uuid::new_v4(),
            name: "Website".to_string(),
            description: "Redesign".to_string(),
            status: DEFAULT_PROJECT_STATUS.to_string(),
            client_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut project = sample();
        let before = project.clone();

        ProjectPatch {
            status: Some("Completed".to_string()),
            ..Default::default()
        }
        .apply(&mut project);

        assert_eq!(project.status, "Completed");
        assert_eq!(project.name, before.name);
        assert_eq!(project.description, before.description);
        assert_eq!(project.client_id, before.client_id);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut project = sample();
        let before = project.clone();
        let patch = ProjectPatch::default();

        assert!(patch.is_empty());
        patch.apply(&mut project);
        assert_eq!(project, before);
    }

    #[test]
    fn default_status_is_not_a_canonical_label() {
        assert!(!PROJECT_STATUSES.contains(&DEFAULT_PROJECT_STATUS));
        assert!(PROJECT_STATUSES[0].eq_ignore_ascii_case(DEFAULT_PROJECT_STATUS));
    }
}
