//! Digest generator: on demand, asks the service for a markdown digest,
//! renders it, and lets the user save the raw markdown.
//!
//! Same split as the news list: `update::update` is the pure transition
//! function, `view::view` draws, and this module executes the effects
//! (`FetchDigest`, `Notify`, `SaveFile`).

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::platform::download::save_file;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{Effect, Msg};
pub use props::DigestGeneratorProps;
pub use state::DigestGenerator;

impl Component for DigestGenerator {
    type Message = Msg;
    type Properties = DigestGeneratorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DigestGenerator::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let effects = update::update(self, msg);
        let rerender = !effects.iter().all(|e| matches!(e, Effect::SaveFile(_)));
        run_effects(ctx, effects);
        rerender
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

fn run_effects(ctx: &Context<DigestGenerator>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::FetchDigest => {
                let service = ctx.props().service.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(update::fetch_digest(&*service).await);
                });
            }
            Effect::Notify(notification) => ctx.props().on_notify.emit(notification),
            Effect::SaveFile(file) => {
                if let Err(err) = save_file(&file) {
                    log::error!("saving {} failed: {:?}", file.filename, err);
                }
            }
        }
    }
}
