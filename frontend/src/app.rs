//! Root component: page chrome, the two independent views, and the toast
//! stack every view reports into.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ServiceHandle;
use crate::components::digest::DigestGenerator;
use crate::components::news_list::NewsListView;
use crate::components::notifier::{toast_stack, Notification, NotificationQueue, ToastId};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub service: ServiceHandle,
}

pub enum Msg {
    Notify(Notification),
    Dismiss(ToastId),
}

pub struct App {
    toasts: NotificationQueue,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            toasts: NotificationQueue::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Notify(notification) => {
                let duration_ms = notification.duration_ms;
                let id = self.toasts.push(notification);
                if duration_ms > 0 {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        TimeoutFuture::new(duration_ms).await;
                        link.send_message(Msg::Dismiss(id));
                    });
                }
                true
            }
            Msg::Dismiss(id) => self.toasts.dismiss(id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let service = ctx.props().service.clone();
        let on_notify = ctx.link().callback(Msg::Notify);
        let on_dismiss = ctx.link().callback(Msg::Dismiss);

        html! {
            <div class="page">
                <main class="container">
                    <h1 class="page-title">{ "AI News Aggregator" }</h1>
                    <DigestGenerator service={service.clone()} on_notify={on_notify.clone()} />
                    <NewsListView {service} {on_notify} />
                </main>
                { toast_stack(&self.toasts, &on_dismiss) }
            </div>
        }
    }
}
