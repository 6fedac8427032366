use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{sqlite::SqlitePoolOptions, Row, SqlitePool};

use crate::model::{format_timestamp, AnalyticsEntry, TIMESTAMP_FORMAT};
use crate::store::traits::AnalyticsStore;

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a SQLite pool at `database_url` (e.g. `sqlite://analytics.db?mode=rwc`)
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .with_context(|| format!("Failed to open SQLite database at {}", database_url))?;

        Ok(Self { pool })
    }

    /// Single-connection in-memory database, mostly for tests
    pub async fn in_memory() -> Result<Self> {
        // Every connection to `sqlite::memory:` gets its own database
        let store = Self::new("sqlite::memory:", 1).await?;
        store.migrate().await?;
        Ok(store)
    }

    /// Create the analytics table if it does not exist yet
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS analytics (id INTEGER PRIMARY KEY, endpoint TEXT, timestamp DATETIME)",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create analytics table")?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl AnalyticsStore for SqliteStore {
    async fn append(&self, endpoint: &str, timestamp: DateTime<Utc>) -> Result<i64> {
        let result = sqlx::query("INSERT INTO analytics (endpoint, timestamp) VALUES (?, ?)")
            .bind(endpoint)
            .bind(format_timestamp(timestamp))
            .execute(&self.pool)
            .await
            .context("Failed to insert analytics entry")?;

        Ok(result.last_insert_rowid())
    }

    async fn list_entries(&self, limit: usize) -> Result<Vec<AnalyticsEntry>> {
        let rows = sqlx::query(
            "SELECT id, endpoint, timestamp FROM analytics ORDER BY id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list analytics entries")?;

        rows.into_iter()
            .map(|row| -> Result<AnalyticsEntry> {
                let raw: String = row.try_get("timestamp")?;
                let timestamp = NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
                    .with_context(|| format!("Malformed analytics timestamp '{}'", raw))?;

                Ok(AnalyticsEntry {
                    id: row.try_get("id")?,
                    endpoint: row.try_get("endpoint")?,
                    timestamp,
                })
            })
            .collect()
    }
}
