use yew::prelude::*;

use crate::api::ServiceHandle;
use crate::components::notifier::Notification;

#[derive(Properties, PartialEq, Clone)]
pub struct NewsListProps {
    /// Source of the article list.
    pub service: ServiceHandle,
    /// Receives the error toast raised when the fetch fails.
    pub on_notify: Callback<Notification>,
}
