use common::model::news_item::NewsItem;

use crate::api::ApiError;
use crate::components::notifier::Notification;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// First render happened; start the one fetch of this mount.
    Mounted,
    /// The list request settled.
    Loaded(Result<Vec<NewsItem>, ApiError>),
}

/// Side effects requested by `update`, executed by the component.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    FetchNews,
    Notify(Notification),
}
