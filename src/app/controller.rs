//! Filter/sort controller.
//!
//! [`ListingController`] owns the canonical article collection, the element
//! bindings produced by the renderer, the category vocabulary, the query state
//! and the surface itself. It is constructed once per page and is the only thing
//! that mutates any of them.
//!
//! # Operations
//!
//! - [`set_search_text`](ListingController::set_search_text): recompute visibility
//! - [`toggle_category`](ListingController::toggle_category) /
//!   [`set_category`](ListingController::set_category): recompute visibility
//! - [`set_sort_order`](ListingController::set_sort_order): reorder, visibility untouched
//! - [`reset`](ListingController::reset): initial query, re-render in load order
//!
//! Visibility is recomputed from scratch for every article on every filter
//! change; there is no cached partial state. After each operation the
//! placeholder is driven by the elements' actual display state.
//!
//! # Example
//!
//! ```
//! use folio::app::ListingController;
//! use folio::ui::MemoryDocument;
//! use folio::Article;
//!
//! let articles = vec![
//!     Article::new("a", "Go basics", "go", "2023-01"),
//!     Article::new("b", "Rust notes", "rust", "2024-06"),
//! ];
//! let mut controller = ListingController::new(articles, MemoryDocument::new());
//!
//! controller.set_search_text("rust");
//! assert_eq!(controller.surface().shown_ids(), ["b"]);
//! assert_eq!(controller.surface().placeholder_visible(), Some(false));
//!
//! controller.reset();
//! assert_eq!(controller.surface().shown_ids(), ["a", "b"]);
//! ```

use crate::domain::{Article, CategoryIndex, QueryState, SortOrder};
use crate::ui::renderer::{render, ElementBindings};
use crate::ui::surface::{Control, Display, ElementHandle, ListingSurface};
use crate::ui::viewmodel::{match_ranges, ListingItem, ListingViewModel, SearchBarInfo};

/// Owner of the listing state for one page.
///
/// All four query operations run to completion before the next one starts;
/// hosts on multi-threaded platforms keep the controller on one task.
#[derive(Debug)]
pub struct ListingController<S> {
    /// Canonical collection in load order.
    ///
    /// Never reordered or mutated after construction. Display order is always
    /// derived from it, so sorting cannot lose the load order.
    articles: Vec<Article>,

    /// Article id → element handle from the latest render.
    ///
    /// Replaced wholesale on every render; handles from an earlier render are
    /// stale and the surface reports no display state for them.
    bindings: ElementBindings,

    /// Distinct category labels, published to the surface once at construction.
    categories: CategoryIndex,

    /// Current search text, selected categories and sort order.
    query: QueryState,

    /// The page the listing is rendered onto.
    surface: S,
}

impl<S: ListingSurface> ListingController<S> {
    /// Renders `articles` (in load order) onto `surface` and publishes the
    /// category vocabulary.
    ///
    /// `original_index` is reassigned from each article's position, so
    /// hand-built collections behave like loaded ones.
    ///
    /// # Parameters
    ///
    /// * `articles` - Canonical collection in load order (may be empty)
    /// * `surface` - Page to render onto; its container is cleared first
    ///
    /// # Returns
    ///
    /// A controller with the initial query: everything shown, load order, reset
    /// trigger emphasized, placeholder shown only for an empty collection.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the article count.
    #[must_use]
    pub fn new(mut articles: Vec<Article>, mut surface: S) -> Self {
        let _span = tracing::debug_span!("controller_new", article_count = articles.len()).entered();

        for (index, article) in articles.iter_mut().enumerate() {
            article.original_index = index;
        }

        let bindings = render(&articles, &mut surface);
        let categories = CategoryIndex::from_articles(&articles);
        surface.set_category_options(categories.labels());

        tracing::debug!(categories = categories.len(), "category filter populated");

        let mut controller = Self {
            articles,
            bindings,
            categories,
            query: QueryState::new(),
            surface,
        };
        controller.refresh_emphasis();
        controller.apply_visibility();
        controller
    }

    /// Replaces the search text and recomputes visibility.
    ///
    /// Empty or whitespace-only text removes the search filter while keeping the
    /// category filter. Sort order is unaffected.
    ///
    /// # Parameters
    ///
    /// * `text` - New search text, matched case-insensitively against title,
    ///   excerpt and tag
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the query length and selected category count.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();

        let _span = tracing::debug_span!("set_search_text",
            query_len = self.query.search_text.len(),
            categories = self.query.selected_categories.len()
        ).entered();

        self.apply_visibility();
    }

    /// Adds `tag` to the selected categories, or removes it if already selected.
    ///
    /// The matching checkbox is synced on the surface. A tag outside the
    /// vocabulary is accepted; while selected it admits only articles carrying it.
    ///
    /// # Parameters
    ///
    /// * `tag` - Category label to flip
    pub fn toggle_category(&mut self, tag: &str) {
        let selected = self.query.toggle_category(tag);

        let _span = tracing::debug_span!("toggle_category", tag = %tag, selected).entered();

        self.note_unknown_category(tag);
        self.surface.set_category_checked(tag, selected);
        self.apply_visibility();
    }

    /// Sets membership of `tag` explicitly, as a checkbox change reports it.
    ///
    /// # Parameters
    ///
    /// * `tag` - Category label of the checkbox
    /// * `selected` - Checked state after the change
    pub fn set_category(&mut self, tag: &str, selected: bool) {
        if selected {
            self.query.selected_categories.insert(tag.to_string());
        } else {
            self.query.selected_categories.remove(tag);
        }

        let _span = tracing::debug_span!("set_category", tag = %tag, selected).entered();

        self.note_unknown_category(tag);
        self.surface.set_category_checked(tag, selected);
        self.apply_visibility();
    }

    /// Reorders the rendered elements; visibility is left as it is.
    ///
    /// Elements are re-appended in [`display_order`](Self::display_order), and
    /// the sort and reset triggers' emphasis follows whether a date sort is active.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        let _span = tracing::debug_span!("set_sort_order", order = ?order).entered();

        self.query.sort_order = order;
        self.apply_order();
        self.refresh_emphasis();
        self.refresh_placeholder();
    }

    /// Advances the sort order the way a sort-trigger click does.
    ///
    /// See [`SortOrder::next`].
    pub fn cycle_sort_order(&mut self) {
        self.set_sort_order(self.query.sort_order.next());
    }

    /// Restores the initial query, full visibility and load order.
    ///
    /// Clears the search field and category checkboxes, then re-renders the
    /// collection. Bindings from before the reset become stale.
    pub fn reset(&mut self) {
        let _span = tracing::debug_span!("reset").entered();

        self.query = QueryState::new();
        self.surface.clear_category_checks();
        self.surface.set_search_text("");

        self.bindings = render(&self.articles, &mut self.surface);
        self.refresh_emphasis();
        self.apply_visibility();
    }

    /// Articles in the current display order.
    ///
    /// Always derived from the canonical collection with a stable sort, so equal
    /// dates keep their load order in both directions.
    #[must_use]
    pub fn display_order(&self) -> Vec<&Article> {
        let order = self.query.sort_order;
        let mut sorted: Vec<&Article> = self.articles.iter().collect();
        sorted.sort_by(|a, b| order.compare(a, b));
        sorted
    }

    /// Number of articles whose element is currently shown on the surface.
    ///
    /// Read back from the surface, not from the filter predicate; an element the
    /// surface no longer knows counts as not shown.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.articles
            .iter()
            .filter(|article| self.is_shown(&article.id))
            .count()
    }

    /// Whether the element bound to `article_id` is currently shown.
    ///
    /// # Returns
    ///
    /// - `true` if the surface reports [`Display::Shown`] for the bound element
    /// - `false` for hidden elements, unknown ids and stale handles
    #[must_use]
    pub fn is_shown(&self, article_id: &str) -> bool {
        self.bindings
            .get(article_id)
            .and_then(|element| self.surface.display(element))
            == Some(Display::Shown)
    }

    /// Computes a display-ready snapshot of the listing.
    ///
    /// Items follow the display order and report their actual visibility. While a
    /// search is active each item carries the title ranges matching it.
    #[must_use]
    pub fn view_model(&self) -> ListingViewModel {
        let searching = !self.query.search_is_empty();

        let items: Vec<ListingItem> = self
            .display_order()
            .into_iter()
            .map(|article| ListingItem {
                id: article.id.clone(),
                title: article.title.clone(),
                excerpt: article.excerpt.clone(),
                tag: article.tag.clone(),
                date: article.date.clone(),
                visible: self.is_shown(&article.id),
                highlight_ranges: if searching {
                    match_ranges(&article.title, &self.query.search_text)
                } else {
                    vec![]
                },
            })
            .collect();

        let visible_count = items.iter().filter(|item| item.visible).count();

        ListingViewModel {
            total_count: items.len(),
            placeholder_shown: visible_count == 0,
            visible_count,
            items,
            search: searching.then(|| SearchBarInfo {
                query: self.query.search_text.clone(),
            }),
            selected_categories: self.query.selected_categories.iter().cloned().collect(),
            sort_order: self.query.sort_order,
        }
    }

    /// The canonical collection, in load order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// The current query state.
    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// The category vocabulary published at construction.
    #[must_use]
    pub const fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    /// Element bindings from the most recent render.
    #[must_use]
    pub const fn bindings(&self) -> &ElementBindings {
        &self.bindings
    }

    /// The surface, for reading back page state.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for host plumbing such as typing into the search field.
    ///
    /// Changes made here bypass the query state; call a controller operation
    /// afterwards to bring visibility back in line.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the controller and hands the surface back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Applies the composition rule to every article's element.
    fn apply_visibility(&mut self) {
        for article in &self.articles {
            let visible = self.query.admits(article);
            match self.bindings.get(&article.id) {
                Some(element) => self.surface.set_display(element, Display::from_visible(visible)),
                None => tracing::debug!(article_id = %article.id, "no element bound, skipping"),
            }
        }

        self.refresh_placeholder();
    }

    /// Re-appends elements in display order.
    fn apply_order(&mut self) {
        let handles: Vec<ElementHandle> = self
            .display_order()
            .into_iter()
            .filter_map(|article| self.bindings.get(&article.id))
            .collect();

        for element in handles {
            self.surface.append(element);
        }
    }

    fn refresh_placeholder(&mut self) {
        let visible = self.visible_count();
        self.surface.set_placeholder_visible(visible == 0);

        tracing::debug!(
            visible_count = visible,
            total = self.articles.len(),
            "listing visibility updated"
        );
    }

    fn refresh_emphasis(&mut self) {
        let sorting = self.query.sort_order.is_active();
        self.surface.set_emphasis(Control::SortTrigger, sorting);
        self.surface.set_emphasis(Control::ResetTrigger, !sorting);
    }

    fn note_unknown_category(&self, tag: &str) {
        if !self.categories.contains(tag) {
            tracing::debug!(tag = %tag, "category not in vocabulary");
        }
    }
}
