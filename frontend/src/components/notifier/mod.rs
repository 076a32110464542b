//! Transient, non-blocking user notifications ("toasts").
//!
//! Views never render toasts themselves. They receive a
//! `Callback<Notification>` from the root and emit into it; the root owns the
//! `NotificationQueue`, renders it with `toast_stack`, and expires each entry
//! after its own duration.

mod notification;
mod queue;
mod view;

pub use notification::Notification;
#[cfg(test)]
pub use notification::Severity;
pub use queue::{NotificationQueue, ToastId};
pub use view::toast_stack;
