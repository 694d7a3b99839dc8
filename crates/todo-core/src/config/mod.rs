//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `TODO__`-prefixed environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod attachments;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::attachments::AttachmentConfig;
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Loaded once at process start and shared read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Todo table settings.
    #[serde(default)]
    pub todos: TodosConfig,
    /// Attachment bucket settings.
    pub attachments: AttachmentConfig,
    /// Token verification settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Run against local stand-ins for the database and object store.
    #[serde(default)]
    pub offline: bool,
}

/// Todo table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodosConfig {
    /// Table holding todo items, keyed by `todo_id`.
    #[serde(default = "default_table")]
    pub table: String,
    /// Secondary index on `user_id`.
    #[serde(default = "default_user_index")]
    pub user_index: String,
    /// Reject update/delete/attach requests for items owned by another subject.
    #[serde(default)]
    pub enforce_ownership: bool,
}

impl Default for TodosConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            user_index: default_user_index(),
            enforce_ownership: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `TODO`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("TODO")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Load configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that serde defaults cannot guard.
    pub fn validate(&self) -> Result<(), AppError> {
        if !is_sql_identifier(&self.todos.table) {
            return Err(AppError::configuration(format!(
                "todos.table is not a valid identifier: {:?}",
                self.todos.table
            )));
        }
        if !is_sql_identifier(&self.todos.user_index) {
            return Err(AppError::configuration(format!(
                "todos.user_index is not a valid identifier: {:?}",
                self.todos.user_index
            )));
        }
        if self.attachments.bucket.trim().is_empty() {
            return Err(AppError::configuration("attachments.bucket must be set"));
        }
        if self.attachments.signed_url_expiration_seconds == 0 {
            return Err(AppError::configuration(
                "attachments.signed_url_expiration_seconds must be positive",
            ));
        }
        if self.auth.jwks_url.trim().is_empty() {
            return Err(AppError::configuration("auth.jwks_url must be set"));
        }
        Ok(())
    }

    /// The database URL to connect to, honouring offline mode.
    pub fn database_url(&self) -> &str {
        if self.offline {
            &self.database.offline_url
        } else {
            &self.database.url
        }
    }
}

/// Table and index names are spliced into SQL, so only plain identifiers pass.
fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn default_table() -> String {
    "todos".to_string()
}

fn default_user_index() -> String {
    "todos_user_id_idx".to_string()
}
