//! Mock SWAPI server shared by the integration tests.

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
struct MockState {
    base_url: String,
}

/// Handle on a running mock upstream
pub struct MockSwapi {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockSwapi {
    /// Number of requests the mock has served
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Deserialize)]
struct SearchParams {
    search: Option<String>,
}

fn person(base: &str, id: u32, name: &str, mass: &str, films: &[u32]) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": mass,
        "hair_color": "blond",
        "birth_year": "19BBY",
        "gender": "male",
        "films": films
            .iter()
            .map(|f| format!("{}/films/{}/", base, f))
            .collect::<Vec<_>>(),
        "url": format!("{}/people/{}/", base, id),
    })
}

fn all_people(base: &str) -> Vec<Value> {
    vec![
        person(base, 1, "Luke Skywalker", "77", &[1, 2, 3]),
        person(base, 5, "Leia Organa", "49", &[1]),
        // Film 999 does not exist upstream
        person(base, 13, "Broken Reference", "0", &[1, 999]),
    ]
}

fn film(id: u32) -> Option<Value> {
    let (title, episode, director, release_date) = match id {
        1 => ("A New Hope", 4, "George Lucas", "1977-05-25"),
        2 => ("The Empire Strikes Back", 5, "Irvin Kershner", "1980-05-17"),
        3 => ("Return of the Jedi", 6, "Richard Marquand", "1983-05-25"),
        _ => return None,
    };
    Some(json!({
        "title": title,
        "episode_id": episode,
        "opening_crawl": "...",
        "director": director,
        "release_date": release_date,
    }))
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found" }))).into_response()
}

async fn search_people(
    State(state): State<MockState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let needle = params.search.unwrap_or_default().to_lowercase();
    if needle == "explode" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let results: Vec<Value> = all_people(&state.base_url)
        .into_iter()
        .filter(|p| {
            p["name"]
                .as_str()
                .map(|name| name.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect();

    Json(json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results,
    }))
    .into_response()
}

async fn get_person(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    all_people(&state.base_url)
        .into_iter()
        .find(|p| p["url"] == format!("{}/people/{}/", state.base_url, id))
        .map(|p| Json(p).into_response())
        .unwrap_or_else(not_found)
}

async fn get_film(Path(id): Path<u32>) -> Response {
    // Later films answer first so completion order differs from reference order
    tokio::time::sleep(Duration::from_millis(30u64.saturating_sub(id as u64 * 10))).await;
    film(id)
        .map(|f| Json(f).into_response())
        .unwrap_or_else(not_found)
}

/// Start a mock SWAPI on an ephemeral loopback port
pub async fn start_mock_swapi() -> MockSwapi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/api", addr);
    let hits = Arc::new(AtomicUsize::new(0));

    let state = MockState {
        base_url: base_url.clone(),
    };

    let counter = hits.clone();
    let app = Router::new()
        .route("/api/people/", get(search_people))
        .route("/api/people/:id/", get(get_person))
        .route("/api/films/:id/", get(get_film))
        .layer(axum::middleware::from_fn(
            move |request: Request<Body>, next: axum::middleware::Next| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    next.run(request).await
                }
            },
        ))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockSwapi { base_url, hits }
}

/// Wait until `check` passes or a second has gone by
#[allow(dead_code)]
pub async fn eventually<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
