// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid address: {value}")]
    Addr { name: &'static str, value: String },
    #[error("{name} is not a valid URL: {value}")]
    Url { name: &'static str, value: String },
    #[error("{name} must be a positive integer, got {value}")]
    Number { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Base of the listings API; `/api/v1/properties` is appended.
    pub api_base: Url,
    pub ipfs_gateway: Url,
    pub fetch_timeout: Duration,
    /// How long a page render waits for listings before showing the
    /// loading state.
    pub render_wait: Duration,
    pub workers: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any name -> value lookup; unset names use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = get("BIND_ADDR", "127.0.0.1:3000");
        let bind_addr = bind.parse().map_err(|_| ConfigError::Addr {
            name: "BIND_ADDR",
            value: bind.clone(),
        })?;

        Ok(Self {
            bind_addr,
            api_base: parse_url("LISTINGS_API_URL", get("LISTINGS_API_URL", "http://localhost:8000"))?,
            ipfs_gateway: parse_url("IPFS_GATEWAY", get("IPFS_GATEWAY", "http://localhost:8080"))?,
            fetch_timeout: Duration::from_secs(parse_number(
                "FETCH_TIMEOUT_SECS",
                get("FETCH_TIMEOUT_SECS", "30"),
            )?),
            render_wait: Duration::from_millis(parse_number(
                "RENDER_WAIT_MS",
                get("RENDER_WAIT_MS", "3000"),
            )?),
            workers: parse_number("SERVER_WORKERS", get("SERVER_WORKERS", "8"))? as usize,
        })
    }
}

fn parse_url(name: &'static str, value: String) -> Result<Url, ConfigError> {
    Url::parse(&value).map_err(|_| ConfigError::Url { name, value })
}

fn parse_number(name: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Number { name, value }),
    }
}
