//! Navigation tree assembly

use super::item::{Label, RenderItem};
use crate::node::{Element, NodeName};
use crate::window::compute_window;
use crate::Paginator;
use std::fmt;
use tracing::debug;

/// Default label of the "previous page" control
pub const DEFAULT_PREV_LABEL: &str = "&laquo;";

/// Default label of the "next page" control
pub const DEFAULT_NEXT_LABEL: &str = "&raquo;";

/// Builds the navigation control for a paginator
///
/// The page window is computed once, on construction. Labels and the
/// disabled-control option only affect the prev/next items.
#[derive(Debug, Clone)]
pub struct Builder<'a> {
    paginator: &'a Paginator,
    max_visible: usize,
    items: Vec<RenderItem>,
    prev_label: Label,
    next_label: Label,
    disabled_controls: bool,
}

impl<'a> Builder<'a> {
    /// Compute the window for `paginator` under a `max_visible` slot budget
    pub fn new(paginator: &'a Paginator, max_visible: usize) -> Self {
        let window = compute_window(
            paginator.total_pages(),
            paginator.current_page(),
            max_visible,
        );
        let items: Vec<RenderItem> = window
            .iter()
            .map(|entry| RenderItem::from_entry(entry, paginator))
            .collect();

        debug!(
            "Built pagination items: {} entries for page {} of {}",
            items.len(),
            paginator.current_page(),
            paginator.total_pages()
        );

        Self {
            paginator,
            max_visible,
            items,
            prev_label: Label::from(DEFAULT_PREV_LABEL),
            next_label: Label::from(DEFAULT_NEXT_LABEL),
            disabled_controls: false,
        }
    }

    /// Set the "previous page" label
    #[must_use]
    pub fn with_prev_label(mut self, label: impl Into<Label>) -> Self {
        self.prev_label = label.into();
        self
    }

    /// Set the "next page" label
    #[must_use]
    pub fn with_next_label(mut self, label: impl Into<Label>) -> Self {
        self.next_label = label.into();
        self
    }

    /// Render unreachable prev/next controls as disabled instead of omitting them
    #[must_use]
    pub fn with_disabled_controls(mut self, enabled: bool) -> Self {
        self.disabled_controls = enabled;
        self
    }

    pub fn paginator(&self) -> &Paginator {
        self.paginator
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Page and gap items, without prev/next
    pub fn items(&self) -> &[RenderItem] {
        &self.items
    }

    /// The "previous page" control, if one should be shown
    pub fn prev_item(&self) -> Option<RenderItem> {
        self.control(self.paginator.prev_page(), &self.prev_label)
    }

    /// The "next page" control, if one should be shown
    pub fn next_item(&self) -> Option<RenderItem> {
        self.control(self.paginator.next_page(), &self.next_label)
    }

    fn control(&self, target: Option<u64>, label: &Label) -> Option<RenderItem> {
        if self.items.is_empty() || (target.is_none() && !self.disabled_controls) {
            return None;
        }
        Some(RenderItem::control(target, label.clone(), self.paginator))
    }

    /// Every item in display order: prev, pages and gaps, next
    pub fn all_items(&self) -> Vec<RenderItem> {
        let mut all = Vec::with_capacity(self.items.len() + 2);
        all.extend(self.prev_item());
        all.extend(self.items.iter().cloned());
        all.extend(self.next_item());
        all
    }

    /// Assemble the `nav > ul > li` tree
    pub fn create_element(&self) -> Element {
        let mut list = Element::new(NodeName::Ul).with_attribute("class", "pagination");
        for item in self.all_items() {
            list.append_child(item.create_element());
        }

        let mut nav = Element::new(NodeName::Nav)
            .with_attribute("class", "navigation")
            .with_attribute("aria-label", "page navigation");
        nav.append_child(list);
        nav
    }

    /// Serialize the control; see [`Element::render`] for `indent`
    pub fn render(&self, indent: Option<usize>) -> String {
        self.create_element().render(indent)
    }
}

impl fmt::Display for Builder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
