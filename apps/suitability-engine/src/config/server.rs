//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port for REST endpoints (/health, /api/v1/*).
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Bind address.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bind_address: default_bind_address(),
        }
    }
}

impl ServerConfig {
    /// `bind_address:http_port`, as accepted by `TcpListener::bind`.
    #[must_use]
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.http_port)
    }
}

const fn default_http_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
