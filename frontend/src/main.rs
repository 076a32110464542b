use yew::platform::spawn_local;

use crate::api::{HttpNewsService, ServiceHandle};
use crate::app::{App, AppProps};

mod api;
mod app;
mod components;
mod config;
mod export;
mod logging;
mod markdown;
mod platform;
mod request_state;

fn main() {
    logging::init();
    spawn_local(async {
        let config = config::resolve().await;
        let service = ServiceHandle::new(HttpNewsService::new(config));
        yew::Renderer::<App>::with_props(AppProps { service }).render();
    });
}
