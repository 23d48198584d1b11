//! Configuration for the taskpulse service.

use std::env;

/// Service configuration, read from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: env::var("TASKPULSE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("TASKPULSE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
        }
    }
}

impl Config {
    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
