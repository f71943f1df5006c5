//! Event adapters.
//!
//! Page controls report [`Event`]s; [`handle_event`] maps each one onto a single
//! controller operation. No filtering logic lives here.
//!
//! | Control event                        | Operation                         |
//! |--------------------------------------|-----------------------------------|
//! | search field Enter                   | `set_search_text(value)`          |
//! | search field input, blank after trim | `set_search_text("")`             |
//! | category checkbox change             | `set_category(category, checked)` |
//! | sort trigger click                   | `cycle_sort_order()`              |
//! | reset trigger click                  | `reset()`                         |

use crate::app::ListingController;
use crate::ui::surface::ListingSurface;

/// Events reported by the page's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Enter pressed in the search field.
    SearchSubmitted(String),
    /// The search field's value changed.
    SearchEdited(String),
    /// A category checkbox changed state.
    CategoryChanged { category: String, checked: bool },
    SortClicked,
    ResetClicked,
}

/// Dispatches `event` to the controller.
///
/// Returns `true` if an operation ran, `false` for events that only matter on
/// submit (editing the search field to a non-blank value).
///
/// # Example
///
/// ```
/// use folio::app::{handle_event, Event, ListingController};
/// use folio::ui::MemoryDocument;
/// use folio::Article;
///
/// let articles = vec![
///     Article::new("a", "Go basics", "go", "2023-01"),
///     Article::new("b", "Rust notes", "rust", "2024-06"),
/// ];
/// let mut controller = ListingController::new(articles, MemoryDocument::new());
///
/// assert!(!handle_event(&mut controller, &Event::SearchEdited("ru".into())));
/// assert!(handle_event(&mut controller, &Event::SearchSubmitted("rust".into())));
/// assert_eq!(controller.surface().shown_ids(), ["b"]);
///
/// assert!(handle_event(&mut controller, &Event::SearchEdited("  ".into())));
/// assert_eq!(controller.surface().shown_ids(), ["a", "b"]);
/// ```
pub fn handle_event<S: ListingSurface>(controller: &mut ListingController<S>, event: &Event) -> bool {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchSubmitted(text) => {
            controller.set_search_text(text.clone());
            true
        }
        Event::SearchEdited(text) => {
            if text.trim().is_empty() {
                controller.set_search_text(String::new());
                true
            } else {
                tracing::trace!(len = text.len(), "search edit pending submit");
                false
            }
        }
        Event::CategoryChanged { category, checked } => {
            controller.set_category(category, *checked);
            true
        }
        Event::SortClicked => {
            controller.cycle_sort_order();
            true
        }
        Event::ResetClicked => {
            controller.reset();
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Article, SortOrder};
    use crate::ui::document::MemoryDocument;

    fn controller() -> ListingController<MemoryDocument> {
        ListingController::new(
            vec![
                Article::new("a", "Go basics", "go", "2023-01"),
                Article::new("b", "Rust notes", "rust", "2024-06"),
                Article::new("c", "Go channels", "go", "2022-03"),
            ],
            MemoryDocument::new(),
        )
    }

    #[test]
    fn checkbox_changes_follow_checked_state() {
        let mut controller = controller();
        let check = |category: &str, checked| Event::CategoryChanged {
            category: category.to_string(),
            checked,
        };

        handle_event(&mut controller, &check("go", true));
        assert_eq!(controller.surface().shown_ids(), ["a", "c"]);

        handle_event(&mut controller, &check("go", true));
        assert_eq!(controller.query().selected_categories.len(), 1);

        handle_event(&mut controller, &check("go", false));
        assert_eq!(controller.surface().shown_ids(), ["a", "b", "c"]);
    }

    #[test]
    fn sort_clicks_alternate_between_date_orders() {
        let mut controller = controller();

        handle_event(&mut controller, &Event::SortClicked);
        assert_eq!(controller.query().sort_order, SortOrder::Ascending);
        assert_eq!(controller.surface().container_ids(), ["c", "a", "b"]);

        handle_event(&mut controller, &Event::SortClicked);
        assert_eq!(controller.query().sort_order, SortOrder::Descending);
        assert_eq!(controller.surface().container_ids(), ["b", "a", "c"]);

        handle_event(&mut controller, &Event::SortClicked);
        assert_eq!(controller.query().sort_order, SortOrder::Ascending);
    }

    #[test]
    fn reset_click_restores_defaults() {
        let mut controller = controller();
        handle_event(&mut controller, &Event::SearchSubmitted("go".to_string()));
        handle_event(&mut controller, &Event::SortClicked);

        handle_event(&mut controller, &Event::ResetClicked);

        assert!(controller.query().is_default());
        assert_eq!(controller.surface().container_ids(), ["a", "b", "c"]);
        assert_eq!(controller.surface().shown_ids(), ["a", "b", "c"]);
    }
}
