//! Host settings, read from the environment at startup.
//!
//! | Variable            | Default                 |
//! |---------------------|-------------------------|
//! | `NEWS_HOST`         | `127.0.0.1`             |
//! | `NEWS_PORT`         | `8080`                  |
//! | `NEWS_API_ORIGIN`   | `http://localhost:8000` |
//! | `NEWS_OPEN_BROWSER` | `true`                  |

use common::config::{ClientConfig, DEFAULT_API_ORIGIN};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("NEWS_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("NEWS_API_ORIGIN must start with http:// or https://, got {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub client: ClientConfig,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("NEWS_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("NEWS_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let api_origin = lookup("NEWS_API_ORIGIN").unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());
        if !(api_origin.starts_with("http://") || api_origin.starts_with("https://")) {
            return Err(ConfigError::InvalidOrigin(api_origin));
        }

        let open_browser = lookup("NEWS_OPEN_BROWSER")
            .map(|raw| !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Ok(Self {
            host,
            port,
            open_browser,
            client: ClientConfig::new(api_origin),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
