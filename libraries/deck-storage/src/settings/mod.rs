//! User settings management
//!
//! Settings are stored per user as key/value pairs. Values are kept verbatim
//! so callers decide how to interpret (and recover from) what they wrote.
//!
//! # Example
//!
//! ```rust,no_run
//! use deck_storage::settings;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! settings::set_setting(pool, "local", "dashboard.modules", "[]").await?;
//! let raw = settings::get_setting(pool, "local", "dashboard.modules").await?;
//! assert_eq!(raw.as_deref(), Some("[]"));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{Row, SqlitePool};
use tracing::trace;

use crate::error::{Result, StorageError};

/// User setting entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSetting {
    /// Setting key
    pub key: String,
    /// Raw stored value
    pub value: String,
    /// Unix timestamp of the last write
    pub updated_at: i64,
}

fn check_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Get a single setting value for a user
///
/// Returns `Ok(None)` if the setting was never written.
pub async fn get_setting(pool: &SqlitePool, user_id: &str, key: &str) -> Result<Option<String>> {
    check_key(key)?;

    let value = sqlx::query_scalar::<_, String>(
        "SELECT value FROM user_settings WHERE user_id = ? AND key = ?",
    )
    .bind(user_id)
    .bind(key)
    .fetch_optional(pool)
    .await?;

    trace!(user_id, key, found = value.is_some(), "Read setting");
    Ok(value)
}

/// Set a setting value for a user, replacing any previous value
pub async fn set_setting(pool: &SqlitePool, user_id: &str, key: &str, value: &str) -> Result<()> {
    check_key(key)?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO user_settings (user_id, key, value, updated_at)
         VALUES (?, ?, ?, ?)
         ON CONFLICT(user_id, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(user_id)
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;

    trace!(user_id, key, bytes = value.len(), "Wrote setting");
    Ok(())
}

/// Delete a setting for a user
///
/// Returns `true` if a value was removed.
pub async fn delete_setting(pool: &SqlitePool, user_id: &str, key: &str) -> Result<bool> {
    check_key(key)?;

    let result = sqlx::query("DELETE FROM user_settings WHERE user_id = ? AND key = ?")
        .bind(user_id)
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// All settings of a user, ordered by key
pub async fn get_all_settings(pool: &SqlitePool, user_id: &str) -> Result<Vec<UserSetting>> {
    let rows = sqlx::query(
        "SELECT key, value, updated_at FROM user_settings WHERE user_id = ? ORDER BY key",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<UserSetting> {
            Ok(UserSetting {
                key: row.try_get("key")?,
                value: row.try_get("value")?,
                updated_at: row.try_get("updated_at")?,
            })
        })
        .collect()
}

/// [`SettingsStore`](deck_core::SettingsStore) backed by the `user_settings` table
///
/// Every instance is bound to one user; several stores may share a pool.
#[derive(Debug, Clone)]
pub struct SqliteSettingsStore {
    pool: SqlitePool,
    user_id: String,
}

impl SqliteSettingsStore {
    /// Create a store for `user_id` on an already migrated pool
    pub fn new(pool: SqlitePool, user_id: impl Into<String>) -> Self {
        Self {
            pool,
            user_id: user_id.into(),
        }
    }

    /// The user this store reads and writes for
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl deck_core::SettingsStore for SqliteSettingsStore {
    async fn get(&self, key: &str) -> deck_core::Result<Option<String>> {
        Ok(get_setting(&self.pool, &self.user_id, key).await?)
    }

    async fn put(&self, key: &str, value: &str) -> deck_core::Result<()> {
        Ok(set_setting(&self.pool, &self.user_id, key, value).await?)
    }
}
