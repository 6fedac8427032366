pub mod client;
pub mod error;

pub use client::*;
pub use error::*;

use crate::model::{Film, Person};

/// Read-only view of the upstream character API
#[async_trait::async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Collection search; results keep upstream order
    async fn search_people(&self, query: &str) -> UpstreamResult<Vec<Person>>;
    /// Single-item lookup by identifier
    async fn get_person(&self, id: &str) -> UpstreamResult<Person>;
    /// Related-resource lookup by absolute URL
    async fn get_film(&self, url: &str) -> UpstreamResult<Film>;
}
