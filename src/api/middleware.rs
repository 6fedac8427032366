use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::store::traits::AnalyticsStore;

/// Record the request path in the analytics log, then continue.
///
/// The insert runs on its own task; a failed insert is logged and never
/// delays or alters the response.
pub async fn record_endpoint<S>(State(store): State<Arc<S>>, request: Request, next: Next) -> Response
where
    S: AnalyticsStore + 'static,
{
    let endpoint = request.uri().path().to_string();
    let timestamp = chrono::Utc::now();

    tokio::spawn(async move {
        if let Err(e) = store.append(&endpoint, timestamp).await {
            log::warn!("Failed to record analytics for {}: {:#}", endpoint, e);
        }
    });

    next.run(request).await
}
