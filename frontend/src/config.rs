//! Resolves the `ClientConfig` at boot.
//!
//! The host publishes it at `/config.json`; a client served from somewhere
//! else falls back to the origin baked in at compile time through the
//! `NEWS_API_ORIGIN` environment variable, and finally to the default.

use common::config::{ClientConfig, CONFIG_PATH};
use gloo_net::http::Request;

pub async fn resolve() -> ClientConfig {
    let published = match fetch_published().await {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("could not load {}: {}", CONFIG_PATH, err);
            None
        }
    };
    let config = choose(published, option_env!("NEWS_API_ORIGIN"));
    log::info!("news service origin: {}", config.api_origin);
    config
}

async fn fetch_published() -> Result<ClientConfig, gloo_net::Error> {
    let response = Request::get(CONFIG_PATH).send().await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "status {}",
            response.status()
        )));
    }
    response.json::<ClientConfig>().await
}

/// Picks the first usable origin: published, then compile-time, then default.
fn choose(published: Option<ClientConfig>, compiled: Option<&str>) -> ClientConfig {
    published
        .filter(|config| !config.api_origin.trim().is_empty())
        .or_else(|| {
            compiled
                .filter(|origin| !origin.trim().is_empty())
                .map(ClientConfig::new)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_config_wins() {
        let config = choose(Some(ClientConfig::new("https://news.example")), Some("http://other"));
        assert_eq!(config.api_origin, "https://news.example");
    }

    #[test]
    fn blank_published_origin_falls_through() {
        let config = choose(Some(ClientConfig::new("  ")), Some("http://compiled:8000"));
        assert_eq!(config.api_origin, "http://compiled:8000");
    }

    #[test]
    fn default_when_nothing_configured() {
        assert_eq!(choose(None, None), ClientConfig::default());
        assert_eq!(choose(None, Some("")), ClientConfig::default());
    }
}
