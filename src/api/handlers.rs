use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::logic::{enrich_people, enrich_person};
use crate::model::EnrichedPerson;
use crate::store::traits::AnalyticsStore;
use crate::upstream::UpstreamApi;

/// Shared handler state: the analytics log and the upstream API
pub struct AppState<S, U> {
    pub store: Arc<S>,
    pub upstream: Arc<U>,
}

impl<S, U> AppState<S, U> {
    pub fn new(store: Arc<S>, upstream: Arc<U>) -> Self {
        Self { store, upstream }
    }
}

impl<S, U> Clone for AppState<S, U> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            upstream: Arc::clone(&self.upstream),
        }
    }
}

pub type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// Read `q` from raw query pairs; the first value wins when it is repeated
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            q: pairs
                .into_iter()
                .find(|(key, _)| key == "q")
                .map(|(_, value)| value),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(message)))
}

fn internal_error() -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

/// `GET /persons?q=` - search characters and enrich every match
pub async fn search_persons<S, U>(
    State(state): State<AppState<S, U>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Vec<EnrichedPerson>>
where
    S: AnalyticsStore,
    U: UpstreamApi,
{
    let params = SearchQuery::from_pairs(pairs);
    let query = match params.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "Search query is required",
            ))
        }
    };

    let people = match state.upstream.search_people(query).await {
        Ok(people) => people,
        Err(e) => {
            log::error!("Search for '{}' failed: {}", query, e);
            return Err(internal_error());
        }
    };

    match enrich_people(&*state.upstream, people).await {
        Ok(persons) => Ok(Json(persons)),
        Err(e) => {
            log::error!("Enriching search results for '{}' failed: {}", query, e);
            Err(internal_error())
        }
    }
}

/// `GET /persons/:id` - look up and enrich a single character
pub async fn get_person<S, U>(
    State(state): State<AppState<S, U>>,
    Path(person_id): Path<String>,
) -> ApiResult<EnrichedPerson>
where
    S: AnalyticsStore,
    U: UpstreamApi,
{
    let person = match state.upstream.get_person(&person_id).await {
        Ok(person) => person,
        Err(e) if e.is_not_found() => {
            return Err(error_response(StatusCode::NOT_FOUND, "Person not found"))
        }
        Err(e) => {
            log::error!("Lookup of person {} failed: {}", person_id, e);
            return Err(internal_error());
        }
    };

    match enrich_person(&*state.upstream, person).await {
        Ok(enriched) => Ok(Json(enriched)),
        Err(e) => {
            log::error!("Enriching person {} failed: {}", person_id, e);
            Err(internal_error())
        }
    }
}
