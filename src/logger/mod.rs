//! Logger module
//!
//! Logging sink for the whole server. Constructed once from the logging
//! configuration and injected through `AppState` rather than living in a
//! process-global, so tests can build silent or file-backed instances freely.

mod writer;

use std::net::SocketAddr;

use crate::config::Config;
use writer::LogTarget;

/// Injected logging sink. Access lines go to the access target, errors and
/// warnings to the error target.
pub struct Logger {
    access: LogTarget,
    error: LogTarget,
    access_log: bool,
}

impl Logger {
    /// Build a logger from configuration. Fails only if a configured log
    /// file cannot be opened.
    pub fn from_config(config: &Config) -> std::io::Result<Self> {
        Ok(Self {
            access: LogTarget::from_path(config.logging.access_log_file.as_deref(), false)?,
            error: LogTarget::from_path(config.logging.error_log_file.as_deref(), true)?,
            access_log: config.logging.access_log,
        })
    }

    /// Silent logger for tests.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self {
            access: LogTarget::Stdout,
            error: LogTarget::Stderr,
            access_log: false,
        }
    }

    fn write_info(&self, message: &str) {
        self.access.write_line(message);
    }

    pub fn log_server_start(&self, addr: &SocketAddr, config: &Config) {
        self.write_info("======================================");
        self.write_info("Healthcare portal demo server started");
        self.write_info(&format!("Listening on: http://{addr}"));
        self.write_info(&format!("Log level: {}", config.logging.level));
        if let Some(workers) = config.server.workers {
            self.write_info(&format!("Worker threads: {workers}"));
        }
        if let Some(ref path) = config.logging.access_log_file {
            self.write_info(&format!("Access log: {path}"));
        }
        if let Some(ref path) = config.logging.error_log_file {
            self.write_info(&format!("Error log: {path}"));
        }
        if config.server.secret_key == "dev-key-change-in-production" {
            self.write_info("Using development secret key; set SECRET_KEY before deploying");
        }
        self.write_info("All backing services are mocked; no data leaves this process");
        self.write_info("======================================\n");
    }

    /// One access line per completed request.
    pub fn log_request(&self, method: &str, path: &str, status: u16) {
        if self.access_log {
            self.write_info(&format!("{method} {path} - {status}"));
        }
    }

    pub fn log_connection_accepted(&self, peer_addr: &SocketAddr) {
        if self.access_log {
            self.write_info(&format!("[Connection] Accepted from: {peer_addr}"));
        }
    }

    pub fn log_connection_error(&self, err: &impl std::fmt::Debug) {
        self.error
            .write_line(&format!("[ERROR] Failed to serve connection: {err:?}"));
    }

    pub fn log_error(&self, message: &str) {
        self.error.write_line(&format!("[ERROR] {message}"));
    }

    pub fn log_warning(&self, message: &str) {
        self.error.write_line(&format!("[WARN] {message}"));
    }

    pub fn log_info(&self, message: &str) {
        self.write_info(message);
    }

    /// Informational line from a stub service. Carries no behavioral effect.
    pub fn log_mock(&self, message: &str) {
        self.write_info(&format!("Mock: {message}"));
    }
}
