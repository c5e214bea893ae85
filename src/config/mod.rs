use std::env;
use std::net::{SocketAddr, ToSocketAddrs};

use thiserror::Error;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::apply_security_headers;

const DEFAULT_DB_PATH: &str = "events.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address '{0}', expected HOST:PORT")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub bind_addr: String,
    pub cors_allowed_origins: Option<String>,
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("EVENTS_DB_PATH")
                .unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").ok(),
            production: env::var("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
        }
    }

    /// Replaces the bind address with a `HOST:PORT` taken from the command line.
    pub fn with_bind_override(mut self, bind_addr: Option<String>) -> Self {
        if let Some(addr) = bind_addr {
            self.bind_addr = addr;
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ConfigError::InvalidBindAddr(self.bind_addr.clone()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DB_PATH.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cors_allowed_origins: None,
            production: false,
        }
    }
}
