use std::env;
use anyhow::{Context, Result};

/// Default port for the items service
pub const ITEMS_DEFAULT_PORT: u16 = 8000;
/// Default port for the notes service
pub const NOTES_DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `PORT` overrides `default_port`, `HOST` overrides the `0.0.0.0` bind address.
    pub fn from_env(default_port: u16) -> Result<Self> {
        Self::from_lookup(default_port, |key| env::var(key).ok())
    }

    fn from_lookup(default_port: u16, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let service_port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("PORT must be a valid port number (0-65535)")?,
            None => default_port,
        };

        let service_host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            service_port,
            service_host,
        })
    }

    /// Socket address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self, service: &str) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service: {}", service);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
