use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::model::AnalyticsEntry;

/// Append-only log of inbound request endpoints
#[async_trait::async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Record one request; returns the row id assigned to it
    async fn append(&self, endpoint: &str, timestamp: DateTime<Utc>) -> Result<i64>;
    /// Most recent entries, newest first
    async fn list_entries(&self, limit: usize) -> Result<Vec<AnalyticsEntry>>;
}
