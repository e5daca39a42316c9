use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

/// Record store settings; without a URL the service keeps its records in memory.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Longest accepted token lifetime: one hundred years.
pub const MAX_EXPIRATION_HOURS: i64 = 100 * 365 * 24;

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime; tokens never expire when unset
    pub expiration_hours: Option<i64>,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (KITTENS_JWT__SECRET, KITTENS_DATABASE__URL, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 3000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: KITTENS_DATABASE__URL=postgres://... overrides database.url
            .add_source(
                Environment::with_prefix("KITTENS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set (KITTENS_JWT__SECRET)".to_string(),
            ));
        }

        if matches!(self.jwt.expiration_hours, Some(hours) if hours <= 0) {
            return Err(ConfigError::Message(
                "jwt.expiration_hours must be positive when set".to_string(),
            ));
        }

        if matches!(self.jwt.expiration_hours, Some(hours) if hours > MAX_EXPIRATION_HOURS) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must not exceed {}",
                MAX_EXPIRATION_HOURS
            )));
        }

        Ok(())
    }
}
