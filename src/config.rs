use serde::{Deserialize, Serialize};

use crate::upstream::SWAPI_BASE_URL;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub connection_string: Option<String>,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Request timeout in seconds; unset keeps the HTTP client's defaults
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            max_connections: Some(5),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: SWAPI_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and the environment
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // GATEWAY_SERVER__PORT, GATEWAY_UPSTREAM__BASE_URL, ...
        config = config.add_source(
            config::Environment::with_prefix("GATEWAY")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the database URL from config or environment
    pub fn database_url(&self) -> String {
        if let Some(connection_string) = &self.database.connection_string {
            return connection_string.clone();
        }

        // Fall back to environment variable
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return url;
        }

        "sqlite://analytics.db?mode=rwc".to_string()
    }

    pub fn max_connections(&self) -> u32 {
        self.database.max_connections.unwrap_or(5).max(1)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
