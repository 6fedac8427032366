use serde::{Deserialize, Serialize};

use crate::model::Movie;

/// A character as returned by the upstream `people` resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub url: String,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: String,
    pub mass: String,
    #[serde(default)]
    pub films: Vec<String>,
}

impl Person {
    /// Identifier taken from the resource URL, e.g. `.../people/1/` -> `"1"`
    pub fn id(&self) -> String {
        derive_id(&self.url)
    }
}

/// Envelope of the upstream collection search
#[derive(Debug, Clone, Deserialize)]
pub struct PeoplePage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Person>,
}

/// Person with its film references resolved, as served by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPerson {
    pub id: String,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub movies: Vec<Movie>,
}

/// Second-from-last `/` segment of a resource URL.
///
/// Resource URLs end in a trailing slash, so the last segment is empty. A
/// string without any `/` is returned whole.
pub fn derive_id(url: &str) -> String {
    let segments: Vec<&str> = url.split('/').collect();
    let index = segments.len().saturating_sub(2);
    segments[index].to_string()
}
