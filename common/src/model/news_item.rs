use serde::{Deserialize, Deserializer, Serialize};

/// One aggregated article as returned by `GET /api/news`.
///
/// The service decides the ordering of the list; clients keep the order they
/// receive and never re-sort by `interesting_score`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct NewsItem {
    /// Headline of the article. Rendered as the outbound link text.
    pub title: String,
    /// Short summary. Empty when the service sends `null` or omits it.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Absolute link to the original article.
    pub url: String,
    /// Label of the publication or feed the article came from.
    pub source: String,
    /// Service-computed interest ranking, opaque to the client.
    pub interesting_score: f64,
}

impl NewsItem {
    /// Score as shown on the item badge: always two decimals.
    pub fn formatted_score(&self) -> String {
        format!("{:.2}", self.interesting_score)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(score: f64) -> NewsItem {
        NewsItem {
            title: "Title".to_string(),
            description: String::new(),
            url: "https://example.com/a".to_string(),
            source: "HN".to_string(),
            interesting_score: score,
        }
    }

    #[test]
    fn score_is_formatted_with_two_decimals() {
        assert_eq!(item(1.0).formatted_score(), "1.00");
        assert_eq!(item(3.14159).formatted_score(), "3.14");
        assert_eq!(item(0.0).formatted_score(), "0.00");
        assert_eq!(item(12.5).formatted_score(), "12.50");
    }

    #[test]
    fn list_preserves_wire_order_and_defaults_description() {
        let body = r#"[
            {"title":"b","url":"https://x/b","source":"s","interesting_score":0.2},
            {"title":"a","description":"d","url":"https://x/a","source":"s","interesting_score":0.9}
        ]"#;
        let items: Vec<NewsItem> = serde_json::from_str(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "b");
        assert_eq!(items[0].description, "");
        assert_eq!(items[1].title, "a");
        assert_eq!(items[1].description, "d");
    }

    #[test]
    fn null_description_and_extra_fields_are_accepted() {
        let body = r#"[
            {"title":"t","description":null,"url":"https://x","source":"s","interesting_score":0.9,
             "published_at":"2024-01-01T00:00:00","created_at":null},
            {"title":"u","description":"kept","url":"https://y","source":"s","interesting_score":0.1,
             "published_at":"2024-01-01T00:00:00","created_at":"2024-01-01T01:00:00"}
        ]"#;
        let items: Vec<NewsItem> = serde_json::from_str(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "");
        assert_eq!(items[1].description, "kept");
    }
}
