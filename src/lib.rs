pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod store;
pub mod upstream;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use logic::{enrich_people, enrich_person};

// Export all model types
pub use model::*;

// Export store types
pub use store::{AnalyticsStore, InMemoryStore, NoopStore, SqliteStore};

pub use upstream::{SwapiClient, UpstreamApi, UpstreamError};

/// Build the gateway from configuration and serve until the listener fails
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info by default, sqlx debug logs suppressed; RUST_LOG still overrides
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .filter_module("sqlx", log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();

    let config = crate::config::AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{} upstream={}",
        config.server.host,
        config.server.port,
        config.upstream.base_url
    );

    let database_url = config.database_url();
    log::info!("Opening analytics database {}", database_url);
    let sqlite_store =
        crate::store::SqliteStore::new(&database_url, config.max_connections()).await?;
    sqlite_store.migrate().await?;

    let swapi = crate::upstream::SwapiClient::from_config(&config.upstream)?;

    let state = crate::api::AppState::new(Arc::new(sqlite_store), Arc::new(swapi));
    let app = crate::api::routes::create_router(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Server is running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
