use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Media type of the exported digest file.
pub const DIGEST_MEDIA_TYPE: &str = "text/markdown";

/// Fixed prefix of the exported digest filename.
pub const DIGEST_FILE_PREFIX: &str = "ai-news-digest";

/// A generated markdown summary as returned by `GET /api/digest/generate`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Digest {
    /// When the service produced the digest. Offset-less timestamps are UTC.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub generated_at: DateTime<Utc>,
    /// Number of stories summarized in `content`, as reported by the service.
    pub story_count: u32,
    /// Score threshold the service used to pick stories.
    pub min_score: f64,
    /// Markdown document. Rendered for display and exported verbatim.
    pub content: String,
}

impl Digest {
    /// Text of the success toast raised when the digest arrives.
    pub fn summary(&self) -> String {
        format!(
            "Generated {} stories with minimum score {}",
            self.story_count, self.min_score
        )
    }
}

/// Parses an RFC 3339 timestamp, or a naive ISO 8601 one taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|n| n.and_utc()))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(de::Error::custom)
}
