use async_trait::async_trait;
use common::config::ClientConfig;
use common::model::digest::Digest;
use common::model::error::{DigestErrorBody, ErrorBody, NewsErrorBody};
use common::model::news_item::NewsItem;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::{interpret, ApiError, NewsService, DIGEST_PATH, NEWS_PATH};

/// `NewsService` backed by `fetch` against the configured origin.
pub struct HttpNewsService {
    config: ClientConfig,
}

impl HttpNewsService {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn get<T, E>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        E: DeserializeOwned + ErrorBody,
    {
        let url = self.config.endpoint(path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        interpret::<T, E>(status, &body)
            .inspect_err(|err| log::warn!("GET {} failed: {}", url, err))
    }
}

#[async_trait(?Send)]
impl NewsService for HttpNewsService {
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, ApiError> {
        self.get::<Vec<NewsItem>, NewsErrorBody>(NEWS_PATH).await
    }

    async fn generate_digest(&self) -> Result<Digest, ApiError> {
        self.get::<Digest, DigestErrorBody>(DIGEST_PATH).await
    }
}
