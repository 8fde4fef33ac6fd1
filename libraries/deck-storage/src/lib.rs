//! Deck Player Storage
//!
//! `SQLite` persistence for dashboard settings.
//!
//! Settings are per-user key/value pairs whose values are opaque strings.
//! The layout engine stores its records here as JSON text and decodes them
//! itself, so a corrupt value never fails a read at this layer.
//!
//! # Example
//!
//! ```rust,no_run
//! use deck_core::SettingsStore;
//! use deck_storage::{create_pool, run_migrations, SqliteSettingsStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://deck.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteSettingsStore::new(pool, "local");
//! store.put("dashboard.layouts", "{}").await?;
//! let raw = store.get("dashboard.layouts").await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod memory;
pub mod settings;

pub use error::{Result, StorageError};
pub use memory::MemorySettingsStore;
pub use settings::SqliteSettingsStore;

use std::path::Path;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use tracing::{debug, info};

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, before the first settings read.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://deck.db`)
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    debug!(url = database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    debug!("SQLite pool ready");
    Ok(pool)
}

/// Connection string for a database file, creating its parent directory
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created
pub fn database_url(path: &Path) -> Result<String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(format!("sqlite://{}", path.display()))
}
