//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Numeric settings fall back to their defaults when unset or unparsable so
//! a typo never prevents startup. LLM settings live in `llm::config`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_CORS_ALLOW_ORIGIN: &str = "http://localhost:3000";

/// Read `key` from the environment and parse it, or return `default`.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Which origins the CORS layer admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    Exact(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub cors_origin: CorsOrigin,
}

impl ServerConfig {
    /// Build server config from `BIND_ADDR`, `PORT` and `CORS_ALLOW_ORIGIN`.
    ///
    /// `CORS_ALLOW_ORIGIN=*` admits any origin.
    #[must_use]
    pub fn from_env() -> Self {
        let bind_addr = env_parse("BIND_ADDR", DEFAULT_BIND_ADDR);
        let port = env_parse("PORT", DEFAULT_PORT);
        let cors_origin = match std::env::var("CORS_ALLOW_ORIGIN") {
            Ok(v) if v.trim() == "*" => CorsOrigin::Any,
            Ok(v) if !v.trim().is_empty() => CorsOrigin::Exact(v.trim().to_string()),
            _ => CorsOrigin::Exact(DEFAULT_CORS_ALLOW_ORIGIN.to_string()),
        };
        Self { bind_addr, port, cors_origin }
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
            cors_origin: CorsOrigin::Exact(DEFAULT_CORS_ALLOW_ORIGIN.to_string()),
        }
    }
}

/// Serializes tests that mutate process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
