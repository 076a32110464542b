use yew::prelude::*;

use super::queue::{NotificationQueue, ToastId};

/// Fixed-position stack of live toasts, oldest on top.
pub fn toast_stack(queue: &NotificationQueue, on_dismiss: &Callback<ToastId>) -> Html {
    html! {
        <div class="toast-stack" role="status" aria-live="polite">
            {
                for queue.iter().map(|(id, notification)| {
                    let id = *id;
                    html! {
                        <div key={id} class={classes!("toast", notification.severity.class())}>
                            <div class="toast-body">
                                <strong class="toast-title">{ notification.title.clone() }</strong>
                                <div class="toast-description">{ notification.description.clone() }</div>
                            </div>
                            {
                                if notification.closable {
                                    html! {
                                        <button
                                            class="toast-close"
                                            title="Close"
                                            onclick={on_dismiss.reform(move |_: MouseEvent| id)}
                                        >
                                            { "✕" }
                                        </button>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                })
            }
        </div>
    }
}
