//! Query state and the visibility composition rule.
//!
//! [`QueryState`] holds the search text, the selected categories and the sort
//! order for the lifetime of a page. The predicates here are the only place the
//! search and category filters are defined; the controller recomputes them from
//! scratch for every article on every mutating operation.
//!
//! An article is visible if and only if it matches the search text (or the search
//! is empty) and its tag is selected (or no category is selected).

use super::article::Article;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Display order over `sortable_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Canonical load order (`original_index` ascending).
    #[default]
    Unsorted,
    /// Oldest first, by lexical `sortable_date`.
    Ascending,
    /// Newest first, by lexical `sortable_date`.
    Descending,
}

impl SortOrder {
    /// The order a sort-trigger click moves to.
    ///
    /// The trigger alternates between the two date orders; only a reset returns
    /// to [`SortOrder::Unsorted`].
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unsorted | Self::Descending => Self::Ascending,
            Self::Ascending => Self::Descending,
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Unsorted)
    }

    /// Compares two articles under this order.
    ///
    /// Meant for a stable sort over the canonical collection: equal keys keep
    /// their original relative order in both date directions.
    #[must_use]
    pub fn compare(self, a: &Article, b: &Article) -> Ordering {
        match self {
            Self::Unsorted => a.original_index.cmp(&b.original_index),
            Self::Ascending => a.sortable_date.cmp(&b.sortable_date),
            Self::Descending => b.sortable_date.cmp(&a.sortable_date),
        }
    }
}

/// Current search, category and sort selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Search text as entered, untrimmed.
    ///
    /// Matched lowercased against title, excerpt and tag. Whitespace-only text
    /// counts as no search.
    pub search_text: String,

    /// Selected category labels.
    ///
    /// Empty means "no category filter"; otherwise an article's tag must be in
    /// the set.
    pub selected_categories: BTreeSet<String>,

    /// Display order. Never affects visibility.
    pub sort_order: SortOrder,
}

impl QueryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitespace-only search text counts as no search.
    #[must_use]
    pub fn search_is_empty(&self) -> bool {
        self.search_text.trim().is_empty()
    }

    #[must_use]
    pub fn matches_search(&self, article: &Article) -> bool {
        if self.search_is_empty() {
            return true;
        }
        article.mentions(&self.search_text.to_lowercase())
    }

    #[must_use]
    pub fn matches_categories(&self, article: &Article) -> bool {
        self.selected_categories.is_empty() || self.selected_categories.contains(&article.tag)
    }

    /// The composition rule: both filters must admit the article.
    #[must_use]
    pub fn admits(&self, article: &Article) -> bool {
        self.matches_search(article) && self.matches_categories(article)
    }

    /// Flips membership of `tag`; returns whether it is selected afterwards.
    pub fn toggle_category(&mut self, tag: &str) -> bool {
        if self.selected_categories.remove(tag) {
            false
        } else {
            self.selected_categories.insert(tag.to_string());
            true
        }
    }

    /// Returns `true` when every field is at its initial value.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search_text.is_empty()
            && self.selected_categories.is_empty()
            && self.sort_order == SortOrder::Unsorted
    }
}
