//! Article domain model.
//!
//! An [`Article`] is one published note as described by its per-article JSON
//! resource, augmented by the loader with its position in the canonical load
//! order. The collection is created once at page load and never mutated.

use serde::{Deserialize, Serialize};

/// Delay step between successive reveal animations, in seconds.
const REVEAL_STEP_SECONDS: f64 = 0.1;

/// One published note.
///
/// Field names follow the JSON resources (`sortableDate`, `revealDelay`).
/// `original_index` is never read from the resource; the loader assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub tag: String,
    #[serde(default)]
    pub date: String,
    /// Lexically comparable date key, e.g. `"2024-06"`.
    pub sortable_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_delay: Option<String>,
    #[serde(skip)]
    pub original_index: usize,
}

impl Article {
    /// Creates an article with empty excerpt and display date.
    ///
    /// ```
    /// use folio::Article;
    ///
    /// let article = Article::new("b", "Rust notes", "rust", "2024-06");
    /// assert_eq!(article.tag, "rust");
    /// assert!(article.excerpt.is_empty());
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        tag: impl Into<String>,
        sortable_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: String::new(),
            tag: tag.into(),
            date: String::new(),
            sortable_date: sortable_date.into(),
            reveal_delay: None,
            original_index: 0,
        }
    }

    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Returns whether the lowercased `needle` occurs in the title, excerpt or tag.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.tag.to_lowercase().contains(needle)
    }

    /// CSS transition delay for the reveal animation of the element at `position`.
    ///
    /// Uses the record's own `revealDelay` when present.
    #[must_use]
    pub fn reveal_delay_at(&self, position: usize) -> String {
        self.reveal_delay.clone().unwrap_or_else(|| {
            #[allow(clippy::cast_precision_loss)]
            let seconds = position as f64 * REVEAL_STEP_SECONDS;
            format!("{}s", (seconds * 10.0).round() / 10.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "id": "rust-notes",
            "title": "Rust notes",
            "tag": "rust",
            "date": "June 2024",
            "sortableDate": "2024-06",
            "originalIndex": 7
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.sortable_date, "2024-06");
        assert_eq!(article.excerpt, "");
        assert_eq!(article.original_index, 0);
    }

    #[test]
    fn missing_tag_is_rejected() {
        let json = r#"{"id": "x", "title": "T", "sortableDate": "2024-01"}"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }

    #[test]
    fn mentions_checks_title_excerpt_and_tag() {
        let article = Article::new("a", "Go Basics", "go", "2023-01").with_excerpt("Channels and Goroutines");
        assert!(article.mentions("basics"));
        assert!(article.mentions("goroutine"));
        assert!(article.mentions("go"));
        assert!(!article.mentions("rust"));
    }

    #[test]
    fn reveal_delay_steps_by_position() {
        let article = Article::new("a", "T", "go", "2023-01");
        assert_eq!(article.reveal_delay_at(0), "0s");
        assert_eq!(article.reveal_delay_at(3), "0.3s");

        let mut custom = article;
        custom.reveal_delay = Some("1.2s".to_string());
        assert_eq!(custom.reveal_delay_at(3), "1.2s");
    }
}
