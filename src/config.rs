use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Owner used when a request carries no `x-user-id` header
    #[serde(default = "default_user")]
    pub default_user: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_user: default_user(),
        }
    }
}

fn default_user() -> String {
    "local".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct OcrConfig {
    /// Photo extraction is disabled while this is empty
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_ocr_model")]
    pub model: String,
    #[serde(default = "default_ocr_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_ocr_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_ocr_model(),
            endpoint: default_ocr_endpoint(),
            timeout_secs: default_ocr_timeout_secs(),
        }
    }
}

impl OcrConfig {
    pub fn enabled(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

fn default_ocr_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_ocr_endpoint() -> String {
    recipebook_ocr::DEFAULT_ENDPOINT.to_string()
}

fn default_ocr_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, GEMINI_API_KEY)
    /// 2. Environment variables (RECIPEBOOK__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:recipebook.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("RECIPEBOOK")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            builder = builder.set_override("ocr.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.app.default_user.trim().is_empty() {
            return Err("Default user must not be empty".to_string());
        }
        Ok(())
    }
}
