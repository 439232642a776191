//! Configuration module
//!
//! Layered configuration: programmatic defaults, an optional `config.toml`,
//! `PORTAL_*` environment variables, and finally the two bare variables the
//! deployment contract promises (`PORT`, `SECRET_KEY`).

use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::logger::Logger;
use crate::services::mock::{MockBlobStore, MockKeyVault};
use crate::services::{BlobStore, SecretProvider};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Session-signing key placeholder. Never logged in full.
    pub secret_key: String,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub access_log_file: Option<String>,
    pub error_log_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub max_body_size: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PORTAL"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.secret_key", "dev-key-change-in-production")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        cfg.apply_platform_env()?;
        Ok(cfg)
    }

    /// Bare `PORT` and `SECRET_KEY` win over every other source.
    fn apply_platform_env(&mut self) -> Result<(), config::ConfigError> {
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                config::ConfigError::Message(format!("invalid PORT value: {port}"))
            })?;
        }
        if let Ok(key) = std::env::var("SECRET_KEY") {
            self.server.secret_key = key;
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Immutable state shared by every request handler.
pub struct AppState {
    pub config: Config,
    pub logger: Arc<Logger>,
    pub secrets: Arc<dyn SecretProvider>,
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    /// Bind the demo service implementations. A production build would pass
    /// real clients here instead.
    pub fn new(config: Config, logger: Arc<Logger>) -> Self {
        Self {
            config,
            secrets: Arc::new(MockKeyVault::new(Arc::clone(&logger))),
            blobs: Arc::new(MockBlobStore::new(Arc::clone(&logger))),
            logger,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Arc<Self> {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                secret_key: "test-key".to_string(),
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_file: None,
                error_log_file: None,
            },
            http: HttpConfig {
                max_body_size: 10_485_760,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
        };
        Arc::new(Self::new(config, Arc::new(Logger::disabled())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_resolution() {
        let state = AppState::for_tests();
        let addr = state.config.get_socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_bad_host_is_rejected() {
        let mut config = AppState::for_tests().config.clone();
        config.server.host = "not a host".to_string();
        assert!(config.get_socket_addr().is_err());
    }
}
