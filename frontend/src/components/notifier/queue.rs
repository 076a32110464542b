use super::notification::Notification;

/// Identifier handed out by `NotificationQueue::push`.
pub type ToastId = u64;

/// Append-only list of live notifications, kept in insertion order.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    next_id: ToastId,
    entries: Vec<(ToastId, Notification)>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push((id, notification));
        id
    }

    /// Removes the entry with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ToastId, Notification)> {
        self.entries.iter()
    }
}
