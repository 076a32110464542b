//! Transitions for the digest generator. Pure: no DOM, no network.
//!
//! - `Generate` while a request is in flight is ignored, so a view never has
//!   more than one outstanding request.
//! - Re-entering `Loading` drops both the previous digest and the error banner.
//! - `Download` without a digest is a silent no-op.

use crate::api::NewsService;
use crate::components::notifier::Notification;
use crate::export::ExportFile;
use crate::request_state::RequestState;

use super::messages::{Effect, Msg};
use super::state::DigestGenerator;

pub const GENERATE_FAILED: &str = "Failed to generate digest";
pub const SUCCESS_TITLE: &str = "Digest Generated";
pub const ERROR_TITLE: &str = "Error";

pub fn update(view: &mut DigestGenerator, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Generate => {
            if view.request.is_loading() {
                log::debug!("digest generation already in flight; ignoring trigger");
                return Vec::new();
            }
            view.request = RequestState::Loading;
            vec![Effect::FetchDigest]
        }
        Msg::Generated(result) => {
            if !view.request.is_loading() {
                return Vec::new();
            }
            match result {
                Ok(digest) => {
                    log::info!(
                        "digest generated: {} stories, min score {}",
                        digest.story_count,
                        digest.min_score
                    );
                    let notification = Notification::success(SUCCESS_TITLE, digest.summary());
                    view.request = RequestState::Success(digest);
                    vec![Effect::Notify(notification)]
                }
                Err(err) => {
                    log::warn!("digest generation failed: {}", err);
                    let message = err.user_message(GENERATE_FAILED);
                    view.request = RequestState::Error(message.clone());
                    vec![Effect::Notify(Notification::error(ERROR_TITLE, message))]
                }
            }
        }
        Msg::Download(today) => match view.digest() {
            Some(digest) => vec![Effect::SaveFile(ExportFile::digest(digest, today))],
            None => Vec::new(),
        },
    }
}

/// Performs the request behind `Effect::FetchDigest`.
pub async fn fetch_digest(service: &dyn NewsService) -> Msg {
    Msg::Generated(service.generate_digest().await)
}
