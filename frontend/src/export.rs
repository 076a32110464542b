use chrono::NaiveDate;
use common::model::digest::{Digest, DIGEST_FILE_PREFIX, DIGEST_MEDIA_TYPE};

/// A file handed to the platform's save mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// The markdown export of `digest`, named after the calendar day `on`.
    pub fn digest(digest: &Digest, on: NaiveDate) -> Self {
        Self {
            filename: format!("{}-{}.md", DIGEST_FILE_PREFIX, on.format("%Y-%m-%d")),
            media_type: DIGEST_MEDIA_TYPE,
            bytes: digest.content.as_bytes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn filename_and_content() {
        let digest = Digest {
            generated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            story_count: 3,
            min_score: 0.7,
            content: "# Digest\n- item one\n\n_é_".to_string(),
        };
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let file = ExportFile::digest(&digest, day);

        assert_eq!(file.filename, "ai-news-digest-2024-03-09.md");
        assert_eq!(file.media_type, "text/markdown");
        assert_eq!(file.bytes, digest.content.as_bytes());
    }
}
