/// How long a toast stays up unless dismissed earlier.
pub const DEFAULT_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS modifier used by the toast stack.
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
        }
    }
}

/// One user-visible message. Independent of every other notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub duration_ms: u32,
    pub closable: bool,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        duration_ms: u32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            duration_ms,
            closable: true,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Error, DEFAULT_DURATION_MS)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Success, DEFAULT_DURATION_MS)
    }
}
