use axum::{middleware, routing::get, Router};

use crate::api::{handlers, middleware::record_endpoint, AppState};
use crate::store::traits::AnalyticsStore;
use crate::upstream::UpstreamApi;

pub fn create_router<S, U>(state: AppState<S, U>) -> Router
where
    S: AnalyticsStore + 'static,
    U: UpstreamApi + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Character lookup
        .route("/persons", get(handlers::search_persons::<S, U>))
        .route("/persons/:id", get(handlers::get_person::<S, U>))
        // Every request is logged, matched or not
        .layer(middleware::from_fn_with_state(
            state.store.clone(),
            record_endpoint::<S>,
        ))
        .with_state(state)
}
