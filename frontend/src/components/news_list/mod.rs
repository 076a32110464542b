//! News list: fetches the current articles once per mount and renders them
//! as cards.
//!
//! Responsibilities
//! - Hold the list's `RequestState` (`state.rs`), transition it in the pure
//!   `update::update` and draw it in `view::view`.
//! - Execute the effects `update` returns: spawn the fetch against the
//!   injected `NewsService`, forward notifications to the root.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{Effect, Msg};
pub use props::NewsListProps;
pub use state::NewsListView;

impl Component for NewsListView {
    type Message = Msg;
    type Properties = NewsListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        NewsListView::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let effects = update::update(self, msg);
        run_effects(ctx, effects);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Mounted);
        }
    }
}

fn run_effects(ctx: &Context<NewsListView>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::FetchNews => {
                let service = ctx.props().service.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(update::fetch_news(&*service).await);
                });
            }
            Effect::Notify(notification) => ctx.props().on_notify.emit(notification),
        }
    }
}
