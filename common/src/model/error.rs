//! Optional structured error bodies returned alongside non-2xx statuses.
//!
//! The two endpoints disagree on the field name: the news list reports
//! `{"error": ...}` while digest generation reports `{"detail": ...}`.

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct NewsErrorBody {
    pub error: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct DigestErrorBody {
    pub detail: Option<String>,
}

/// Implemented by error bodies that may carry a human-readable message.
pub trait ErrorBody {
    /// The service-provided message, if present and not blank.
    fn message(self) -> Option<String>;
}

impl ErrorBody for NewsErrorBody {
    fn message(self) -> Option<String> {
        non_blank(self.error)
    }
}

impl ErrorBody for DigestErrorBody {
    fn message(self) -> Option<String> {
        non_blank(self.detail)
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_endpoint_specific_field() {
        let news: NewsErrorBody = serde_json::from_str(r#"{"error":"feed down"}"#).unwrap();
        assert_eq!(news.message().as_deref(), Some("feed down"));

        let digest: DigestErrorBody =
            serde_json::from_str(r#"{"detail":"scoring model unavailable"}"#).unwrap();
        assert_eq!(digest.message().as_deref(), Some("scoring model unavailable"));
    }

    #[test]
    fn blank_or_foreign_fields_count_as_absent() {
        let news: NewsErrorBody = serde_json::from_str(r#"{"detail":"wrong key"}"#).unwrap();
        assert_eq!(news.message(), None);

        let digest: DigestErrorBody = serde_json::from_str(r#"{"detail":"   "}"#).unwrap();
        assert_eq!(digest.message(), None);
    }
}
