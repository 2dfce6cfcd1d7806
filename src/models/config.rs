use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_ENV: &str = "GEOJSON_API_ADDR";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid GEOJSON_API_ADDR value {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

impl ServerConfig {
    /// Build config from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_addr_var(std::env::var(ADDR_ENV).ok())
    }

    fn from_addr_var(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(value) => {
                let addr = value
                    .parse()
                    .map_err(|source| ConfigError::InvalidAddr { value: value.clone(), source })?;
                Ok(Self { addr })
            }
            None => Ok(Self::default()),
        }
    }
}

/// Where the listing handler resolves its working directory from
#[derive(Debug, Clone)]
pub enum DataRoot {
    /// Process working directory, looked up on every request
    CurrentDir,
    Fixed(PathBuf),
}

impl DataRoot {
    pub fn resolve(&self) -> std::io::Result<PathBuf> {
        match self {
            DataRoot::CurrentDir => std::env::current_dir(),
            DataRoot::Fixed(path) => Ok(path.clone()),
        }
    }
}
