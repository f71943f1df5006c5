//! In-memory listing surface.
//!
//! [`MemoryDocument`] models the notes page as plain data: an ordered container
//! of elements, an optional no-results placeholder, category checkboxes, a
//! search field and control emphasis. It is the headless rendering target and
//! the test double for browser bindings.

use super::surface::{Control, Display, ElementHandle, ElementSpec, ListingSurface};
use std::collections::{BTreeMap, HashMap};

/// One rendered article element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub spec: ElementSpec,
    pub display: Display,
}

/// One category checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub label: String,
    pub checked: bool,
}

/// An in-memory page.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    next_handle: u64,
    nodes: HashMap<ElementHandle, ElementNode>,
    container: Vec<ElementHandle>,
    /// `Some(visible)` when the page has a placeholder.
    placeholder: Option<bool>,
    fallback: Option<String>,
    category_options: Vec<CategoryOption>,
    search_text: String,
    emphasis: BTreeMap<Control, bool>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a page with a hidden placeholder, the reset trigger emphasized.
    #[must_use]
    pub fn new() -> Self {
        let mut emphasis = BTreeMap::new();
        emphasis.insert(Control::ResetTrigger, true);
        emphasis.insert(Control::SortTrigger, false);

        Self {
            next_handle: 1,
            nodes: HashMap::new(),
            container: Vec::new(),
            placeholder: Some(false),
            fallback: None,
            category_options: Vec::new(),
            search_text: String::new(),
            emphasis,
        }
    }

    /// Creates a page that has no placeholder element.
    #[must_use]
    pub fn without_placeholder() -> Self {
        Self {
            placeholder: None,
            ..Self::new()
        }
    }

    /// Article ids in container order.
    #[must_use]
    pub fn container_ids(&self) -> Vec<&str> {
        self.container
            .iter()
            .filter_map(|handle| self.nodes.get(handle))
            .map(|node| node.spec.article_id.as_str())
            .collect()
    }

    /// Ids of shown elements, in container order.
    #[must_use]
    pub fn shown_ids(&self) -> Vec<&str> {
        self.container
            .iter()
            .filter_map(|handle| self.nodes.get(handle))
            .filter(|node| node.display == Display::Shown)
            .map(|node| node.spec.article_id.as_str())
            .collect()
    }

    #[must_use]
    pub fn element(&self, handle: ElementHandle) -> Option<&ElementNode> {
        self.nodes.get(&handle)
    }

    /// Number of live elements, attached or not.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.nodes.len()
    }

    /// `None` when the page has no placeholder.
    #[must_use]
    pub const fn placeholder_visible(&self) -> Option<bool> {
        self.placeholder
    }

    #[must_use]
    pub fn fallback_message(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    #[must_use]
    pub fn category_options(&self) -> &[CategoryOption] {
        &self.category_options
    }

    #[must_use]
    pub fn checked_categories(&self) -> Vec<&str> {
        self.category_options
            .iter()
            .filter(|option| option.checked)
            .map(|option| option.label.as_str())
            .collect()
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Simulates the user typing into the search field.
    pub fn type_search(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    #[must_use]
    pub fn is_emphasized(&self, control: Control) -> bool {
        self.emphasis.get(&control).copied().unwrap_or(false)
    }
}

impl ListingSurface for MemoryDocument {
    fn clear_container(&mut self) {
        for handle in self.container.drain(..) {
            self.nodes.remove(&handle);
        }
    }

    fn create_element(&mut self, spec: &ElementSpec) -> ElementHandle {
        let handle = ElementHandle(self.next_handle);
        self.next_handle += 1;
        self.nodes.insert(
            handle,
            ElementNode {
                spec: spec.clone(),
                display: Display::Shown,
            },
        );
        handle
    }

    fn append(&mut self, element: ElementHandle) {
        if !self.nodes.contains_key(&element) {
            tracing::debug!(handle = element.0, "append of unknown element ignored");
            return;
        }
        self.container.retain(|handle| *handle != element);
        self.container.push(element);
    }

    fn set_display(&mut self, element: ElementHandle, display: Display) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.display = display;
        }
    }

    fn display(&self, element: ElementHandle) -> Option<Display> {
        self.nodes.get(&element).map(|node| node.display)
    }

    fn set_placeholder_visible(&mut self, visible: bool) {
        if let Some(state) = self.placeholder.as_mut() {
            *state = visible;
        }
    }

    fn show_fallback(&mut self, message: &str) {
        self.clear_container();
        self.placeholder = None;
        self.fallback = Some(message.to_string());
    }

    fn set_category_options(&mut self, categories: &[String]) {
        self.category_options = categories
            .iter()
            .map(|label| CategoryOption {
                label: label.clone(),
                checked: false,
            })
            .collect();
    }

    fn set_category_checked(&mut self, category: &str, checked: bool) {
        if let Some(option) = self
            .category_options
            .iter_mut()
            .find(|option| option.label == category)
        {
            option.checked = checked;
        }
    }

    fn clear_category_checks(&mut self) {
        for option in &mut self.category_options {
            option.checked = false;
        }
    }

    fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    fn set_emphasis(&mut self, control: Control, emphasized: bool) {
        self.emphasis.insert(control, emphasized);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Article;

    fn spec(id: &str) -> ElementSpec {
        ElementSpec::for_article(&Article::new(id, id, "go", "2023-01"), 0)
    }

    #[test]
    fn append_moves_existing_elements() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element(&spec("a"));
        let b = doc.create_element(&spec("b"));
        doc.append(a);
        doc.append(b);
        doc.append(a);
        assert_eq!(doc.container_ids(), ["b", "a"]);
    }

    #[test]
    fn clear_drops_elements_and_keeps_placeholder() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element(&spec("a"));
        doc.append(a);
        doc.set_placeholder_visible(true);

        doc.clear_container();

        assert!(doc.container_ids().is_empty());
        assert_eq!(doc.display(a), None);
        assert_eq!(doc.placeholder_visible(), Some(true));
    }

    #[test]
    fn fallback_replaces_listing() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element(&spec("a"));
        doc.append(a);

        doc.show_fallback("Failed to load notes.");
        doc.set_placeholder_visible(true);

        assert_eq!(doc.fallback_message(), Some("Failed to load notes."));
        assert!(doc.container_ids().is_empty());
        assert_eq!(doc.placeholder_visible(), None);
    }

    #[test]
    fn unknown_categories_are_ignored() {
        let mut doc = MemoryDocument::new();
        doc.set_category_options(&["go".to_string()]);
        doc.set_category_checked("rust", true);
        doc.set_category_checked("go", true);
        assert_eq!(doc.checked_categories(), ["go"]);
    }
}
