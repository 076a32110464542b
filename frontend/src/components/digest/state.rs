use common::model::digest::Digest;

use crate::request_state::RequestState;

/// State of the digest generator: nothing is requested until the user asks.
pub struct DigestGenerator {
    pub request: RequestState<Digest>,
}

impl DigestGenerator {
    pub fn new() -> Self {
        Self {
            request: RequestState::Idle,
        }
    }

    /// The digest currently on screen, if the last request succeeded.
    pub fn digest(&self) -> Option<&Digest> {
        self.request.data()
    }
}

impl Default for DigestGenerator {
    fn default() -> Self {
        Self::new()
    }
}
