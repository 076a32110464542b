use serde::{Deserialize, Serialize};

/// Origin used when nothing else is configured.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

/// Path at which the host publishes the client configuration.
pub const CONFIG_PATH: &str = "/config.json";

/// Runtime configuration handed from the host to the browser client.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base origin of the remote news service, e.g. `http://localhost:8000`.
    pub api_origin: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_origin: impl Into<String>) -> Self {
        Self {
            api_origin: api_origin.into(),
        }
    }

    /// Absolute URL of `path` on the configured origin, joined with a single `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
