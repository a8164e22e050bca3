use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use url::Url;

// Runtime/server settings, read once at startup and immutable afterwards.

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub spoonacular_base_url: Url,
    pub upstream_timeout: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingApiKey,
    InvalidPort(String),
    InvalidBindAddr(String),
    InvalidBaseUrl(String),
    InvalidTimeout(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey => write!(f, "SPOONACULAR_API_KEY must be set"),
            ConfigError::InvalidPort(value) => write!(f, "PORT is not a valid port: {value}"),
            ConfigError::InvalidBindAddr(value) => {
                write!(f, "BIND_ADDR is not a valid ip address: {value}")
            }
            ConfigError::InvalidBaseUrl(value) => {
                write!(f, "SPOONACULAR_BASE_URL is not an http(s) url: {value}")
            }
            ConfigError::InvalidTimeout(value) => {
                write!(f, "SPOONACULAR_TIMEOUT_MS is not a number of milliseconds: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// Keep the API key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("port", &self.port)
            .field("spoonacular_base_url", &self.spoonacular_base_url.as_str())
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Build from any key/value source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = read("SPOONACULAR_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let port = match read("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let bind_addr = match read("BIND_ADDR") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(value))?,
            None => DEFAULT_BIND_ADDR,
        };

        let base_url = read("SPOONACULAR_BASE_URL")
            .unwrap_or_else(|| DEFAULT_SPOONACULAR_BASE_URL.to_string());
        let spoonacular_base_url = Url::parse(base_url.trim())
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or(ConfigError::InvalidBaseUrl(base_url))?;

        let upstream_timeout = match read("SPOONACULAR_TIMEOUT_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|millis| *millis > 0)
                .map(Duration::from_millis)
                .ok_or(ConfigError::InvalidTimeout(value))?,
            None => DEFAULT_UPSTREAM_TIMEOUT,
        };

        Ok(Self {
            api_key,
            bind_addr,
            port,
            spoonacular_base_url,
            upstream_timeout,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
