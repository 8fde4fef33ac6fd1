/// Application configuration
use deck_core::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, read from the working directory when present
pub const CONFIG_FILE: &str = "deck.toml";

/// Environment variable prefix (`DECK_DATABASE_PATH`, `DECK_USER_ID`, ...)
pub const ENV_PREFIX: &str = "DECK";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeckConfig {
    /// `SQLite` file holding the settings table
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Whose settings to read and write
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// `tracing` filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            user_id: default_user_id(),
            log_filter: default_log_filter(),
        }
    }
}

impl DeckConfig {
    /// Load configuration from file and environment
    ///
    /// `path` replaces the default `deck.toml`; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path.to_path_buf())),
            None => settings.add_source(config::File::with_name(CONFIG_FILE).required(false)),
        };

        // Override with environment variables (prefixed with DECK_)
        settings = settings.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config = settings
            .build()
            .map_err(|e| DeckError::config(e.to_string()))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| DeckError::config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(DeckError::config("user_id must not be empty"));
        }

        if self.database_path.as_os_str().is_empty() {
            return Err(DeckError::config("database_path must not be empty"));
        }

        Ok(())
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("deck.db")
}

fn default_user_id() -> String {
    "local".to_string()
}

fn default_log_filter() -> String {
    "deck_desktop=info,deck_layout=info,deck_storage=info".to_string()
}
