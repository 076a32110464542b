//! Transitions for the news list. Pure: no DOM, no network.

use crate::api::NewsService;
use crate::components::notifier::Notification;
use crate::request_state::RequestState;

use super::messages::{Effect, Msg};
use super::state::NewsListView;

pub const FETCH_FAILED: &str = "Failed to fetch news";
pub const ERROR_TITLE: &str = "Error fetching news";

pub fn update(view: &mut NewsListView, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Mounted => {
            if view.requested {
                return Vec::new();
            }
            view.requested = true;
            view.request = RequestState::Loading;
            vec![Effect::FetchNews]
        }
        Msg::Loaded(result) => {
            if !view.request.is_loading() {
                log::debug!("dropping news result that arrived outside Loading");
                return Vec::new();
            }
            match result {
                Ok(items) => {
                    log::info!("loaded {} news items", items.len());
                    view.request = RequestState::Success(items);
                    Vec::new()
                }
                Err(err) => {
                    log::warn!("news fetch failed: {}", err);
                    let message = err.user_message(FETCH_FAILED);
                    view.request = RequestState::Error(message.clone());
                    vec![Effect::Notify(Notification::error(ERROR_TITLE, message))]
                }
            }
        }
    }
}

/// Performs the request behind `Effect::FetchNews`.
pub async fn fetch_news(service: &dyn NewsService) -> Msg {
    Msg::Loaded(service.fetch_news().await)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;
    use common::model::digest::Digest;
    use common::model::news_item::NewsItem;
    use futures::executor::block_on;

    use super::*;
    use crate::api::ApiError;
    use crate::components::notifier::Severity;

    struct StubService {
        calls: Cell<usize>,
        news: Result<Vec<NewsItem>, ApiError>,
    }

    impl StubService {
        fn new(news: Result<Vec<NewsItem>, ApiError>) -> Self {
            Self {
                calls: Cell::new(0),
                news,
            }
        }
    }

    #[async_trait(?Send)]
    impl NewsService for StubService {
        async fn fetch_news(&self) -> Result<Vec<NewsItem>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.news.clone()
        }

        async fn generate_digest(&self) -> Result<Digest, ApiError> {
            unreachable!("news list never asks for a digest")
        }
    }

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            description: String::new(),
            url: format!("https://example.com/{title}"),
            source: "Feed".to_string(),
            interesting_score: 0.5,
        }
    }

    /// Mounts the view and runs every fetch effect against `service`.
    fn mount_and_settle(service: &StubService) -> (NewsListView, Vec<Effect>) {
        let mut view = NewsListView::new();
        let mut emitted = Vec::new();
        let mut pending = update(&mut view, Msg::Mounted);
        while let Some(effect) = pending.pop() {
            match effect {
                Effect::FetchNews => {
                    let msg = block_on(fetch_news(service));
                    pending.extend(update(&mut view, msg));
                }
                other => emitted.push(other),
            }
        }
        (view, emitted)
    }

    #[test]
    fn starts_loading_and_fetches_once_per_mount() {
        let mut view = NewsListView::new();
        assert!(view.request.is_loading());
        assert_eq!(update(&mut view, Msg::Mounted), vec![Effect::FetchNews]);
        assert!(update(&mut view, Msg::Mounted).is_empty());
    }

    #[test]
    fn success_keeps_response_order() {
        let service = StubService::new(Ok(vec![item("c"), item("a"), item("b")]));
        let (view, effects) = mount_and_settle(&service);

        assert_eq!(service.calls.get(), 1);
        assert!(effects.is_empty());
        let titles: Vec<_> = view
            .request
            .data()
            .unwrap()
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_list_is_success_without_notifications() {
        let service = StubService::new(Ok(Vec::new()));
        let (view, effects) = mount_and_settle(&service);

        assert_eq!(view.request, RequestState::Success(Vec::new()));
        assert_eq!(view.request.error(), None);
        assert!(effects.is_empty());
    }

    #[test]
    fn service_error_text_reaches_banner_and_toast() {
        let service = StubService::new(Err(ApiError::Service {
            status: 503,
            detail: Some("feeds are refreshing".to_string()),
        }));
        let (view, effects) = mount_and_settle(&service);

        assert_eq!(view.request.error(), Some("feeds are refreshing"));
        match effects.as_slice() {
            [Effect::Notify(n)] => {
                assert_eq!(n.title, ERROR_TITLE);
                assert_eq!(n.description, "feeds are refreshing");
                assert_eq!(n.severity, Severity::Error);
                assert_eq!(n.duration_ms, 5_000);
                assert!(n.closable);
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn transport_and_payload_errors_use_generic_text() {
        for err in [
            ApiError::Transport("offline".to_string()),
            ApiError::Payload("expected a sequence".to_string()),
            ApiError::Service {
                status: 500,
                detail: None,
            },
        ] {
            let service = StubService::new(Err(err));
            let (view, effects) = mount_and_settle(&service);
            assert_eq!(view.request.error(), Some(FETCH_FAILED));
            assert_eq!(
                effects,
                vec![Effect::Notify(Notification::error(ERROR_TITLE, FETCH_FAILED))]
            );
        }
    }

    #[test]
    fn late_result_after_settling_is_ignored() {
        let service = StubService::new(Ok(vec![item("a")]));
        let (mut view, _) = mount_and_settle(&service);

        let effects = update(
            &mut view,
            Msg::Loaded(Err(ApiError::Transport("late".to_string()))),
        );
        assert!(effects.is_empty());
        assert_eq!(view.request.data().map(Vec::len), Some(1));
    }
}
