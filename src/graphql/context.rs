use std::sync::Arc;

use crate::db::Store;

/// Per-schema data shared by every resolver
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: Arc<dyn Store>,
    /// Status stored by `addProject` when the caller omits one
    pub default_project_status: String,
}

impl GraphQLContext {
    pub fn new(store: Arc<dyn Store>, default_project_status: impl Into<String>) -> Self {
        Self {
            store,
            default_project_status: default_project_status.into(),
        }
    }
}
