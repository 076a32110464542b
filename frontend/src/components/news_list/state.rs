use common::model::news_item::NewsItem;

use crate::request_state::RequestState;

/// State of the news list component.
///
/// Starts in `Loading`: the fetch is issued as soon as the component mounts,
/// so there is no visible idle phase.
pub struct NewsListView {
    pub request: RequestState<Vec<NewsItem>>,

    /// Guards the mount-time fetch so it is issued at most once.
    pub requested: bool,
}

impl NewsListView {
    pub fn new() -> Self {
        Self {
            request: RequestState::Loading,
            requested: false,
        }
    }
}

impl Default for NewsListView {
    fn default() -> Self {
        Self::new()
    }
}
