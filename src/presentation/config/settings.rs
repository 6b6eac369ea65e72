use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::observability::TracingConfig;

use super::Environment;

pub const DEFAULT_LOG_LEVEL: &str = "info,message_board=debug,tower_http=debug";

/// Value of `database.url` that selects the process-local store instead of SQLite.
pub const IN_MEMORY_DATABASE_URL: &str = "memory";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    /// Insert one default message at startup when the table is empty.
    pub seed_default: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, then `appsettings.<env>` (optional), then `APP_*` variables.
    ///
    /// Nested keys use a double underscore: `APP_SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5555_i64)?
            .set_default("database.url", "sqlite://app.db")?
            .set_default("database.max_connections", 5_i64)?
            .set_default("database.seed_default", true)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("logging.json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        TracingConfig {
            environment: environment.to_string(),
            json_format: self.logging.json,
            level: self.logging.level.clone(),
        }
    }

    pub fn uses_in_memory_store(&self) -> bool {
        self.database.url == IN_MEMORY_DATABASE_URL
    }
}
