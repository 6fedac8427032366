//! SWAPI HTTP client
//!
//! Thin JSON client for the public Star Wars API. No retries and no caching;
//! every call maps straight onto one GET.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::model::{Film, PeoplePage, Person};
use crate::upstream::{UpstreamApi, UpstreamError, UpstreamResult};

pub const SWAPI_BASE_URL: &str = "https://swapi.dev/api";

/// Query parameter the upstream collection search expects
const SEARCH_PARAM: &str = "search";

#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: Client,
    base_url: String,
}

impl SwapiClient {
    /// Create a client against `base_url` with transport-default timeouts
    pub fn new(base_url: impl Into<String>) -> UpstreamResult<Self> {
        Self::build(base_url.into(), None)
    }

    pub fn from_config(config: &UpstreamConfig) -> UpstreamResult<Self> {
        Self::build(
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(base_url: String, timeout: Option<Duration>) -> UpstreamResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|source| UpstreamError::Network {
            url: base_url.clone(),
            source,
        })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode the body as `T`
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> UpstreamResult<T> {
        let display_url = url.to_string();

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| UpstreamError::Network {
                url: display_url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::http_status(display_url, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Network {
                url: display_url.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode {
            url: display_url,
            source,
        })
    }

    /// `{base}/people/{id}/` with `id` kept as one percent-encoded path segment
    pub fn person_url(&self, id: &str) -> UpstreamResult<Url> {
        let raw = format!("{}/people/", self.base_url);
        let mut url = Self::parse_url(&raw)?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(raw.clone()))?
            .pop_if_empty()
            .push(id)
            .push("");
        Ok(url)
    }

    fn parse_url(raw: &str) -> UpstreamResult<Url> {
        Url::parse(raw).map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", raw, e)))
    }
}

#[async_trait::async_trait]
impl UpstreamApi for SwapiClient {
    async fn search_people(&self, query: &str) -> UpstreamResult<Vec<Person>> {
        let raw = format!("{}/people/", self.base_url);
        let url = Url::parse_with_params(&raw, &[(SEARCH_PARAM, query)])
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let page: PeoplePage = self.fetch_json(url).await?;
        Ok(page.results)
    }

    async fn get_person(&self, id: &str) -> UpstreamResult<Person> {
        let url = self.person_url(id)?;
        self.fetch_json(url).await
    }

    async fn get_film(&self, url: &str) -> UpstreamResult<Film> {
        let url = Self::parse_url(url)?;
        self.fetch_json(url).await
    }
}
