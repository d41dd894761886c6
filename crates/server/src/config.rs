use std::net::{Ipv4Addr, SocketAddr};

use bioskop_catalog::bioskop::API_BASE_URL;
use bioskop_catalog::mapper::SITE_URL;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 7000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Runtime configuration. Only the port comes from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_base_url: String,
    pub site_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: API_BASE_URL.to_string(),
            site_url: SITE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_port_var(std::env::var("PORT").ok().as_deref())
    }

    fn with_port_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) {
            config.port = raw.parse().map_err(|source| ConfigError::InvalidPort {
                value: raw.to_string(),
                source,
            })?;
        }
        Ok(config)
    }

    /// All interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
