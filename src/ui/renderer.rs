//! Article list renderer.
//!
//! Projects a collection onto a surface: clear the container, create one element
//! per article in the order given, append each in sequence, and record which
//! element belongs to which article id.
//!
//! Rendering is idempotent. A second call with the same collection replaces every
//! element, and the returned [`ElementBindings`] supersede the old ones entirely.

use crate::domain::Article;
use crate::ui::surface::{ElementHandle, ElementSpec, ListingSurface};
use std::collections::HashMap;

/// Article id → element handle, populated once per render.
///
/// Later components look elements up here; nothing scans the surface to find
/// an article's element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementBindings {
    by_id: HashMap<String, ElementHandle>,
}

impl ElementBindings {
    /// Handle of the element rendered for `article_id`, if any.
    #[must_use]
    pub fn get(&self, article_id: &str) -> Option<ElementHandle> {
        self.by_id.get(article_id).copied()
    }
}

/// Renders `articles` into the surface's container, in slice order.
///
/// # Example
///
/// ```
/// use folio::ui::{render, MemoryDocument};
/// use folio::Article;
///
/// let articles = vec![
///     Article::new("a", "Go basics", "go", "2023-01"),
///     Article::new("b", "Rust notes", "rust", "2024-06"),
/// ];
/// let mut doc = MemoryDocument::new();
/// let bindings = render(&articles, &mut doc);
///
/// assert_eq!(doc.container_ids(), ["a", "b"]);
/// assert!(bindings.get("b").is_some());
/// ```
pub fn render<S>(articles: &[Article], surface: &mut S) -> ElementBindings
where
    S: ListingSurface + ?Sized,
{
    let _span = tracing::debug_span!("render", article_count = articles.len()).entered();

    surface.clear_container();

    let mut by_id = HashMap::with_capacity(articles.len());
    for (position, article) in articles.iter().enumerate() {
        let element = surface.create_element(&ElementSpec::for_article(article, position));
        surface.append(element);
        by_id.insert(article.id.clone(), element);
    }

    tracing::debug!(bound = by_id.len(), "articles rendered");
    ElementBindings { by_id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::document::MemoryDocument;
    use crate::ui::surface::Display;

    fn articles() -> Vec<Article> {
        vec![
            Article::new("a", "Go basics", "go", "2023-01").with_date("Jan 2023"),
            Article::new("b", "Rust notes", "rust", "2024-06"),
        ]
    }

    #[test]
    fn elements_carry_article_attributes() {
        let mut doc = MemoryDocument::new();
        let bindings = render(&articles(), &mut doc);

        let node = doc.element(bindings.get("a").unwrap()).unwrap();
        assert_eq!(node.spec.tag, "go");
        assert_eq!(node.spec.sortable_date, "2023-01");
        assert_eq!(node.spec.date, "Jan 2023");
        assert_eq!(node.display, Display::Shown);

        let second = doc.element(bindings.get("b").unwrap()).unwrap();
        assert_eq!(second.spec.reveal_delay, "0.1s");
    }

    #[test]
    fn rerender_replaces_previous_elements() {
        let mut doc = MemoryDocument::new();
        let first = render(&articles(), &mut doc);
        let second = render(&articles(), &mut doc);

        assert_eq!(doc.container_ids(), ["a", "b"]);
        assert_eq!(doc.element_count(), 2);
        assert_ne!(first.get("a"), second.get("a"));
        assert_eq!(doc.display(first.get("a").unwrap()), None);
    }

    #[test]
    fn rerender_keeps_placeholder() {
        let mut doc = MemoryDocument::new();
        doc.set_placeholder_visible(true);
        render(&articles(), &mut doc);
        assert_eq!(doc.placeholder_visible(), Some(true));
    }
}
