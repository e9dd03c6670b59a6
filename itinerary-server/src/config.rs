//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Maximum number of tickets accepted in one request.
    /// Larger requests are rejected before reconstruction runs.
    pub max_tickets: usize,

    /// Maximum request body size in bytes.
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(host: IpAddr, port: u16, max_tickets: usize, body_limit_bytes: usize) -> Self {
        Self {
            host,
            port,
            max_tickets,
            body_limit_bytes,
        }
    }

    /// Load from `ITINERARY_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup.
    ///
    /// Missing or unparseable values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: parse_var(&lookup, "ITINERARY_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "ITINERARY_PORT").unwrap_or(defaults.port),
            max_tickets: parse_var(&lookup, "ITINERARY_MAX_TICKETS")
                .unwrap_or(defaults.max_tickets),
            body_limit_bytes: parse_var(&lookup, "ITINERARY_BODY_LIMIT_BYTES")
                .unwrap_or(defaults.body_limit_bytes),
        }
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            max_tickets: 10_000,
            body_limit_bytes: 1024 * 1024, // 1 MiB
        }
    }
}
