use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Storage format of `analytics.timestamp`, identical to SQLite's `datetime('now')`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the request analytics log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEntry {
    pub id: i64,
    pub endpoint: String,
    pub timestamp: NaiveDateTime,
}

impl AnalyticsEntry {
    pub fn new(id: i64, endpoint: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            endpoint: endpoint.into(),
            timestamp: truncate_to_seconds(timestamp),
        }
    }
}

/// Drops sub-second precision so in-memory and SQLite rows compare equal
pub fn truncate_to_seconds(timestamp: DateTime<Utc>) -> NaiveDateTime {
    let naive = timestamp.naive_utc();
    naive.with_nanosecond(0).unwrap_or(naive)
}

pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
