mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DEFAULT_LOG_LEVEL, DatabaseSettings, IN_MEMORY_DATABASE_URL, LoggingSettings, ServerSettings,
    Settings,
};
