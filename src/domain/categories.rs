//! Category vocabulary derived from the loaded collection.

use super::article::Article;
use std::collections::BTreeSet;

/// Sorted, distinct category labels of a collection.
///
/// Built once after load; the collection never changes during a session so the
/// index is never rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    labels: Vec<String>,
}

impl CategoryIndex {
    /// Scans `articles` once and collects their distinct, non-empty tags.
    ///
    /// ```
    /// use folio::{Article, CategoryIndex};
    ///
    /// let articles = vec![
    ///     Article::new("a", "Rust notes", "rust", "2024-06"),
    ///     Article::new("b", "Go basics", "go", "2023-01"),
    ///     Article::new("c", "More Rust", "rust", "2024-07"),
    /// ];
    /// let index = CategoryIndex::from_articles(&articles);
    /// assert_eq!(index.labels(), ["go", "rust"]);
    /// ```
    #[must_use]
    pub fn from_articles(articles: &[Article]) -> Self {
        let labels: BTreeSet<&str> = articles
            .iter()
            .map(|article| article.tag.as_str())
            .filter(|tag| !tag.is_empty())
            .collect();

        Self {
            labels: labels.into_iter().map(String::from).collect(),
        }
    }

    /// Labels in ascending lexical order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether `label` is one of the collection's tags.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.binary_search_by(|probe| probe.as_str().cmp(label)).is_ok()
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tags_are_skipped() {
        let articles = vec![
            Article::new("a", "A", "", "2024-01"),
            Article::new("b", "B", "zig", "2024-02"),
        ];
        let index = CategoryIndex::from_articles(&articles);
        assert_eq!(index.len(), 1);
        assert!(index.contains("zig"));
        assert!(!index.contains(""));
    }

    #[test]
    fn empty_collection_has_no_labels() {
        assert!(CategoryIndex::from_articles(&[]).is_empty());
    }
}
