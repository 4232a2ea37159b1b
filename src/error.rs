use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Errors raised by a [`Store`](crate::db::Store) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid id '{0}'")]
    InvalidId(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::InvalidId(_) => "INVALID_ID",
            StoreError::Database(_) | StoreError::Migration(_) => "DATABASE_ERROR",
        }
    }
}

impl ErrorExtensions for StoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
