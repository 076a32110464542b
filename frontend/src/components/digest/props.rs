use yew::prelude::*;

use crate::api::ServiceHandle;
use crate::components::notifier::Notification;

#[derive(Properties, PartialEq, Clone)]
pub struct DigestGeneratorProps {
    /// Produces the digest on each generation request.
    pub service: ServiceHandle,
    /// Receives the success and error toasts.
    pub on_notify: Callback<Notification>,
}
