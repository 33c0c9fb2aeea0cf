use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub events: EventsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Storage backend: "memory" or "dynamodb"
    #[serde(default = "default_store_backend")]
    pub backend: String,
    /// Table holding notification records
    #[serde(default = "default_table_name")]
    pub table_name: String,
    /// AWS region override (SDK default when unset)
    pub region: Option<String>,
    /// Endpoint override (e.g. LocalStack)
    pub endpoint: Option<String>,
    /// Store operation timeout in milliseconds
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// Capacity of the record-created broadcast channel
    #[serde(default = "default_events_buffer_size")]
    pub buffer_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_store_backend() -> String {
    "memory".to_string()
}

fn default_table_name() -> String {
    crate::store::schema::TABLE_NAME.to_string()
}

fn default_events_buffer_size() -> usize {
    256
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("store.backend", "memory")?
            .set_default("store.table_name", crate::store::schema::TABLE_NAME)?
            .set_default("events.buffer_size", 256)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER__PORT, STORE__BACKEND, STORE__TABLE_NAME, etc.
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            table_name: default_table_name(),
            region: None,
            endpoint: None,
            timeout_ms: None,
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_events_buffer_size(),
        }
    }
}
