//! Boundary to the remote news service.
//!
//! Views depend on the `NewsService` trait only; `HttpNewsService` is the
//! production implementation and tests substitute their own. Whatever the
//! transport does, callers always receive either the decoded payload or an
//! `ApiError` that knows how to phrase itself for the user.

mod http;

use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;
use common::model::digest::Digest;
use common::model::error::ErrorBody;
use common::model::news_item::NewsItem;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use http::HttpNewsService;

pub const NEWS_PATH: &str = "/api/news";
pub const DIGEST_PATH: &str = "/api/digest/generate";

/// Why a request to the news service did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (network, DNS, CORS, aborted body read).
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a non-2xx status.
    #[error("service responded with status {status}")]
    Service { status: u16, detail: Option<String> },
    /// A 2xx body that does not decode into the expected shape.
    #[error("unexpected response payload: {0}")]
    Payload(String),
}

impl ApiError {
    /// Message shown to the user: the service's own text when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Service {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// The two read operations the client performs against the news service.
#[async_trait(?Send)]
pub trait NewsService {
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, ApiError>;
    async fn generate_digest(&self) -> Result<Digest, ApiError>;
}

/// Cheaply clonable service reference usable as a Yew property.
#[derive(Clone)]
pub struct ServiceHandle(Rc<dyn NewsService>);

impl ServiceHandle {
    pub fn new(service: impl NewsService + 'static) -> Self {
        Self(Rc::new(service))
    }
}

impl Deref for ServiceHandle {
    type Target = dyn NewsService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Turns a status code and raw body into the endpoint's payload or an error.
///
/// `E` is the endpoint's structured error body; its message only survives when
/// the status is non-2xx and the body decodes.
pub fn interpret<T, E>(status: u16, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    E: DeserializeOwned + ErrorBody,
{
    if (200..300).contains(&status) {
        serde_json::from_str(body).map_err(|err| ApiError::Payload(err.to_string()))
    } else {
        let detail = serde_json::from_str::<E>(body)
            .ok()
            .and_then(ErrorBody::message);
        Err(ApiError::Service { status, detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::error::{DigestErrorBody, NewsErrorBody};

    const FALLBACK: &str = "Failed to generate digest";

    #[test]
    fn success_body_is_decoded_in_order() {
        let body = r#"[
            {"title":"first","description":"","url":"https://a","source":"A","interesting_score":1},
            {"title":"second","description":"","url":"https://b","source":"B","interesting_score":2}
        ]"#;
        let items = interpret::<Vec<NewsItem>, NewsErrorBody>(200, body).unwrap();
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn structured_detail_wins_over_fallback() {
        let err = interpret::<Digest, DigestErrorBody>(
            500,
            r#"{"detail":"scoring model unavailable"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Service {
                status: 500,
                detail: Some("scoring model unavailable".to_string())
            }
        );
        assert_eq!(err.user_message(FALLBACK), "scoring model unavailable");
    }

    #[test]
    fn non_json_error_body_uses_fallback() {
        let err = interpret::<Digest, DigestErrorBody>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.user_message(FALLBACK), FALLBACK);
    }

    #[test]
    fn news_endpoint_reads_error_not_detail() {
        let err =
            interpret::<Vec<NewsItem>, NewsErrorBody>(503, r#"{"detail":"nope"}"#).unwrap_err();
        assert_eq!(err.user_message("Failed to fetch news"), "Failed to fetch news");

        let err =
            interpret::<Vec<NewsItem>, NewsErrorBody>(503, r#"{"error":"db offline"}"#).unwrap_err();
        assert_eq!(err.user_message("Failed to fetch news"), "db offline");
    }

    #[test]
    fn malformed_success_body_is_a_payload_error() {
        let err = interpret::<Vec<NewsItem>, NewsErrorBody>(200, r#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Payload(_)));
        assert_eq!(err.user_message("Failed to fetch news"), "Failed to fetch news");
    }

    #[test]
    fn transport_errors_use_fallback() {
        let err = ApiError::Transport("dns".to_string());
        assert_eq!(err.user_message(FALLBACK), FALLBACK);
    }
}
