// Configuration management with layered configuration (file, env)

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure containing all configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub api: ApiConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests still running after this many seconds are dropped, which
    /// cancels their in-flight queries.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_request_timeout() -> u64 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_seconds: u64,
    /// Server-side `statement_timeout`; 0 disables it.
    #[serde(default)]
    pub statement_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Include the raw database error text in 500 responses.
    #[serde(default)]
    pub expose_store_errors: bool,
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

fn default_page_size() -> u32 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            expose_store_errors: false,
            default_page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    #[serde(default)]
    pub json_logs: bool,
    /// Directory for the per-pipeline error logs. `None` keeps console logging only.
    #[serde(default)]
    pub error_log_dir: Option<String>,
    #[serde(default = "default_client_log_file")]
    pub client_log_file: String,
    #[serde(default = "default_invoice_log_file")]
    pub invoice_log_file: String,
}

fn default_client_log_file() -> String {
    "errores_clientes.log".to_string()
}

fn default_invoice_log_file() -> String {
    "errores_facturas.log".to_string()
}

impl Settings {
    /// Load configuration with layered precedence: defaults → file → env
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("config")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default configuration
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Add local configuration (not committed to git)
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // Add environment-specific configuration
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.server.request_timeout_seconds == 0 {
            return Err("Server request_timeout_seconds must be greater than 0".to_string());
        }

        if self.database.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.database.min_connections > self.database.max_connections {
            return Err("Database min_connections cannot exceed max_connections".to_string());
        }

        if self.api.default_page_size == 0 {
            return Err("API default_page_size must be greater than 0".to_string());
        }

        if self.observability.error_log_dir.is_some()
            && (self.observability.client_log_file.is_empty()
                || self.observability.invoice_log_file.is_empty())
        {
            return Err("Error log file names cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                request_timeout_seconds: default_request_timeout(),
                allowed_origins: Vec::new(),
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/sawdb".to_string(),
                max_connections: 10,
                min_connections: 1,
                connect_timeout_seconds: 30,
                statement_timeout_seconds: 30,
            },
            api: ApiConfig::default(),
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
                error_log_dir: Some("logs".to_string()),
                client_log_file: default_client_log_file(),
                invoice_log_file: default_invoice_log_file(),
            },
        }
    }
}
