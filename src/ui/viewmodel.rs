//! View model types representing a renderable listing snapshot.
//!
//! View models are computed by
//! [`ListingController::view_model`](crate::app::ListingController::view_model)
//! and contain no logic, only display-ready data: items in display order, their
//! visibility, title highlight ranges for the current search, and the visible and
//! total counts.

use crate::domain::SortOrder;

/// Complete listing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingViewModel {
    /// Every article, in display order, hidden ones included.
    pub items: Vec<ListingItem>,

    /// Number of items whose element is currently shown.
    pub visible_count: usize,

    /// Size of the canonical collection.
    pub total_count: usize,

    /// Whether the no-results placeholder should be shown.
    ///
    /// Always `visible_count == 0`.
    pub placeholder_shown: bool,

    /// Present while a non-blank search is active.
    pub search: Option<SearchBarInfo>,

    /// Selected category labels in sorted order; empty means no category filter.
    pub selected_categories: Vec<String>,

    pub sort_order: SortOrder,
}

impl ListingViewModel {
    /// Ids of visible items, in display order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.visible)
            .map(|item| item.id.as_str())
            .collect()
    }
}

/// Display information for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    /// Article identifier, unique within the collection.
    pub id: String,

    /// Title as published; highlight ranges index into it.
    pub title: String,

    /// Summary text, empty when the record has none.
    pub excerpt: String,

    /// Category label.
    pub tag: String,

    /// Human-readable date; the sort key is not exposed here.
    pub date: String,

    /// Whether the article's element is currently shown on the surface.
    pub visible: bool,

    /// Byte ranges `(start, end)` of search matches within `title`.
    ///
    /// Both ends fall on char boundaries of `title`, so `&title[start..end]`
    /// never panics.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Active search information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// The search text exactly as submitted.
    pub query: String,
}

/// Finds non-overlapping, case-insensitive occurrences of `needle` in `text`.
///
/// Matching runs on the lowercased text, which may differ from `text` in byte
/// length per character (`'İ'` lowercases to two chars, `'ẞ'` to a shorter
/// one). Every lowercased byte remembers the original character it came from,
/// and each match is widened to whole original characters. A match that only
/// covers part of an already highlighted character is dropped.
///
/// # Returns
///
/// Byte ranges into `text`, ascending and non-overlapping. Empty when `needle`
/// is empty or does not occur.
///
/// # Example
///
/// ```
/// use folio::ui::viewmodel::match_ranges;
///
/// let title = "İẞ notes";
/// let ranges = match_ranges(title, "ß");
/// assert_eq!(ranges, vec![(2, 5)]);
/// assert_eq!(&title[2..5], "ẞ");
/// ```
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return vec![];
    }

    let mut haystack = String::with_capacity(text.len());
    // Original (start, end) of the character each haystack byte was lowered from.
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        for lowered in ch.to_lowercase() {
            haystack.push(lowered);
            origin.extend(std::iter::repeat((start, end)).take(lowered.len_utf8()));
        }
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(&needle) {
        let found = from + offset;
        let last = found + needle.len() - 1;
        from = found + needle.len();

        let (start, _) = origin[found];
        let (_, end) = origin[last];
        if ranges.last().is_some_and(|&(_, previous_end)| start < previous_end) {
            continue;
        }
        ranges.push((start, end));
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_case_insensitive_and_non_overlapping() {
        assert_eq!(match_ranges("Rust and rust", "RUST"), vec![(0, 4), (9, 13)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Go basics", "").is_empty());
        assert!(match_ranges("Go basics", "rust").is_empty());
    }

    #[test]
    fn ranges_stay_on_char_boundaries_when_lowercasing_changes_widths() {
        // 'İ' grows from 2 to 3 bytes and 'ẞ' shrinks from 3 to 2, so the
        // lowercased title has the same total length but shifted offsets.
        let title = "İẞ notes";

        for needle in ["ß", "notes", "i", "İẞ", "s"] {
            for &(start, end) in &match_ranges(title, needle) {
                assert!(title.is_char_boundary(start), "{needle}: {start}");
                assert!(title.is_char_boundary(end), "{needle}: {end}");
                let _ = &title[start..end];
            }
        }

        assert_eq!(match_ranges(title, "ß"), vec![(2, 5)]);
        assert_eq!(match_ranges(title, "NOTES"), vec![(6, 11)]);
        assert_eq!(match_ranges(title, "i"), vec![(0, 2)]);
    }

    #[test]
    fn visible_ids_follow_item_order() {
        let item = |id: &str, visible: bool| ListingItem {
            id: id.to_string(),
            title: String::new(),
            excerpt: String::new(),
            tag: String::new(),
            date: String::new(),
            visible,
            highlight_ranges: vec![],
        };
        let vm = ListingViewModel {
            items: vec![item("b", true), item("a", false), item("c", true)],
            visible_count: 2,
            total_count: 3,
            placeholder_shown: false,
            search: None,
            selected_categories: vec![],
            sort_order: SortOrder::Unsorted,
        };
        assert_eq!(vm.visible_ids(), ["b", "c"]);
    }
}
