use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the application
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database connection URL, or `memory://` for the in-process store
    pub database_url: String,
    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Deployment environment; `development` turns on GraphiQL
    #[serde(default = "default_app_env")]
    pub app_env: String,
    /// Postgres pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Status stored by `addProject` when none is supplied
    #[serde(default = "default_project_status")]
    pub default_project_status: String,
    /// Allowed browser origin; permissive when unset
    #[serde(default)]
    pub cors_origin: Option<String>,
}

fn default_port() -> u16 {
    5000
}

fn default_app_env() -> String {
    "production".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_project_status() -> String {
    crate::models::DEFAULT_PROJECT_STATUS.to_string()
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize environment variables into Config struct
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Whether this is a development run
    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("development")
    }

    /// Whether the in-process store was requested instead of Postgres
    pub fn uses_memory_store(&self) -> bool {
        self.database_url.starts_with("memory://")
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    let config = Config::load()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        envy::from_iter(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .unwrap()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = from_pairs(&[("DATABASE_URL", "postgres://localhost/tracker")]);

        assert_eq!(config.database_url(), "postgres://localhost/tracker");
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.default_project_status, "Not Started");
        assert!(config.cors_origin.is_none());
        assert!(!config.is_development());
        assert!(!config.uses_memory_store());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = from_pairs(&[
            ("DATABASE_URL", "memory://"),
            ("PORT", "8080"),
            ("APP_ENV", "Development"),
            ("DEFAULT_PROJECT_STATUS", "Not started"),
            ("CORS_ORIGIN", "http://localhost:3000"),
        ]);

        assert_eq!(config.port, 8080);
        assert!(config.is_development());
        assert!(config.uses_memory_store());
        assert_eq!(config.default_project_status, "Not started");
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let result = envy::from_iter::<_, Config>(vec![("PORT".to_string(), "80".to_string())]);
        assert!(result.is_err());
    }
}
