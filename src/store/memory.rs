use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::model::AnalyticsEntry;
use crate::store::traits::AnalyticsStore;

/// Process-local analytics log
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<Vec<AnalyticsEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Endpoints in insertion order
    pub fn endpoints(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|entry| entry.endpoint.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl AnalyticsStore for InMemoryStore {
    async fn append(&self, endpoint: &str, timestamp: DateTime<Utc>) -> Result<i64> {
        let mut entries = self.entries.lock();
        let id = entries.len() as i64 + 1;
        entries.push(AnalyticsEntry::new(id, endpoint, timestamp));
        Ok(id)
    }

    async fn list_entries(&self, limit: usize) -> Result<Vec<AnalyticsEntry>> {
        let entries = self.entries.lock();
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }
}

/// Discards every entry
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

#[async_trait::async_trait]
impl AnalyticsStore for NoopStore {
    async fn append(&self, _endpoint: &str, _timestamp: DateTime<Utc>) -> Result<i64> {
        Ok(0)
    }

    async fn list_entries(&self, _limit: usize) -> Result<Vec<AnalyticsEntry>> {
        Ok(Vec::new())
    }
}
