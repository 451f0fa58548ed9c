use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options for the product service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_address")]
    pub address: String,
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// SQLite database path or URL.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Upper bound on pooled store connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "products.db".to_string()
}

fn default_max_connections() -> u32 {
    8
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl ServerConfig {
    /// Load settings from `config/default.yaml`, `config/{APP_ENV}.yaml` and
    /// `APP_*` environment variables, later sources overriding earlier ones.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Socket address string suitable for logging.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}
