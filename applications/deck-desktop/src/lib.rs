//! Deck Player - Desktop shell
//!
//! The [`Dashboard`] coordinator, the player [`Session`] that feeds it,
//! application configuration and the wiring from configuration to a
//! SQLite-backed dashboard.

pub mod config;
pub mod dashboard;
pub mod session;

pub use config::DeckConfig;
pub use dashboard::{Dashboard, DashboardSnapshot, LibraryStats, MANAGER_PANEL, RECENTS_LIMIT};
pub use session::Session;

use deck_core::Result;
use deck_layout::GridModel;
use deck_storage::SqliteSettingsStore;
use tracing::info;

/// Open the configured database and load the dashboard from it
pub async fn open_dashboard(config: &DeckConfig) -> Result<Dashboard<SqliteSettingsStore>> {
    let url = deck_storage::database_url(&config.database_path)?;
    let pool = deck_storage::create_pool(&url).await?;
    deck_storage::run_migrations(&pool).await?;

    info!(
        database = %config.database_path.display(),
        user = %config.user_id,
        "Opened settings database"
    );

    let store = SqliteSettingsStore::new(pool, config.user_id.clone());
    Ok(Dashboard::load(store, GridModel::default()).await)
}
