//! The rendering surface boundary.
//!
//! [`ListingSurface`] is everything the engine needs from a page: one container
//! of article elements, a "no results" placeholder, and a handful of optional
//! control affordances. A browser binding implements it against the DOM; the
//! crate ships [`MemoryDocument`](super::document::MemoryDocument) as an
//! in-memory implementation.
//!
//! Affordance methods have no-op defaults. A surface that lacks a control simply
//! does not override them, and the engine carries on.

use crate::domain::Article;

/// Opaque handle to an element created by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(pub u64);

/// Rendered display state of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// Rendered normally.
    Shown,
    /// Present in the container but not displayed.
    Hidden,
}

impl Display {
    /// Maps a visibility decision to a display state.
    #[must_use]
    pub const fn from_visible(visible: bool) -> Self {
        if visible {
            Self::Shown
        } else {
            Self::Hidden
        }
    }
}

/// Page controls whose emphasis the controller manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    /// Restores the default listing.
    ResetTrigger,
    /// Sorts by date.
    SortTrigger,
}

/// Attributes and content of one article element.
///
/// The first three fields are element attributes (`data-id`, `data-tag`,
/// `data-date` on a DOM page); the rest is visible content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    /// Identifier of the article the element shows.
    pub article_id: String,

    /// Category label, for styling and filtering hooks.
    pub tag: String,

    /// Lexical date key the listing sorts by.
    pub sortable_date: String,

    /// Human-readable date line.
    pub date: String,

    /// Heading text.
    pub title: String,

    /// Summary paragraph; empty when the article has none.
    pub excerpt: String,

    /// CSS delay for the reveal animation, e.g. `"0.3s"`.
    pub reveal_delay: String,
}

impl ElementSpec {
    /// Describes the element for `article` rendered at `position` in the container.
    #[must_use]
    pub fn for_article(article: &Article, position: usize) -> Self {
        Self {
            article_id: article.id.clone(),
            tag: article.tag.clone(),
            sortable_date: article.sortable_date.clone(),
            date: article.date.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            reveal_delay: article.reveal_delay_at(position),
        }
    }
}

/// A page that can show an article listing.
pub trait ListingSurface {
    /// Removes every article element from the container.
    ///
    /// The no-results placeholder survives a clear. Handles of removed elements
    /// become stale.
    fn clear_container(&mut self);

    /// Creates a detached, shown element.
    fn create_element(&mut self, spec: &ElementSpec) -> ElementHandle;

    /// Appends `element` to the end of the container, moving it if already there.
    fn append(&mut self, element: ElementHandle);

    /// Shows or hides `element` without moving it.
    ///
    /// Stale or unknown handles are ignored.
    fn set_display(&mut self, element: ElementHandle, display: Display);

    /// Current display state, or `None` for a stale or unknown handle.
    fn display(&self, element: ElementHandle) -> Option<Display>;

    /// Shows or hides the no-results placeholder, if the page has one.
    fn set_placeholder_visible(&mut self, visible: bool) {
        let _ = visible;
    }

    /// Replaces the listing with a user-visible failure message.
    fn show_fallback(&mut self, message: &str) {
        let _ = message;
    }

    /// Publishes the category vocabulary as filter options.
    fn set_category_options(&mut self, categories: &[String]) {
        let _ = categories;
    }

    /// Syncs the checkbox for `category`; categories without a checkbox are
    /// ignored.
    fn set_category_checked(&mut self, category: &str, checked: bool) {
        let _ = (category, checked);
    }

    /// Unchecks every category checkbox.
    fn clear_category_checks(&mut self) {}

    /// Replaces the search field's value.
    fn set_search_text(&mut self, text: &str) {
        let _ = text;
    }

    /// Marks `control` as the active one, or clears that marking.
    fn set_emphasis(&mut self, control: Control, emphasized: bool) {
        let _ = (control, emphasized);
    }
}
