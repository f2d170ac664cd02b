//! Window types
//!
//! A window is the ordered list of entries a control displays, left to right.

use serde::Serialize;

/// Label used for gap markers
pub const ELLIPSIS: &str = "...";

/// One slot in a page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowEntry {
    /// A link to a concrete page
    Page {
        /// 1-based page number
        number: u64,
        /// Whether this is the page being viewed
        is_current: bool,
    },
    /// Gap marker for omitted pages
    Ellipsis,
}

impl WindowEntry {
    /// Create a page entry
    pub fn page(number: u64, is_current: bool) -> Self {
        Self::Page { number, is_current }
    }

    /// Page number, or `None` for a gap
    pub fn number(&self) -> Option<u64> {
        match self {
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }

    /// Check if this is the current page
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Page { is_current: true, .. })
    }

    /// Check if this is a gap marker
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    /// Display label: the page number, or `...` for a gap
    pub fn label(&self) -> String {
        match self {
            Self::Page { number, .. } => number.to_string(),
            Self::Ellipsis => ELLIPSIS.to_string(),
        }
    }
}

/// Ordered sequence of window entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Window {
    entries: Vec<WindowEntry>,
}

impl Window {
    /// Create an empty window
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push_page(&mut self, number: u64, current_page: i64) {
        let is_current = i64::try_from(number).is_ok_and(|n| n == current_page);
        self.entries.push(WindowEntry::page(number, is_current));
    }

    /// Append a gap marker unless the previous entry already is one
    pub(crate) fn push_ellipsis(&mut self) {
        if !self.entries.last().is_some_and(WindowEntry::is_ellipsis) {
            self.entries.push(WindowEntry::Ellipsis);
        }
    }

    pub fn entries(&self) -> &[WindowEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindowEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry marked current, if any
    pub fn current_page(&self) -> Option<u64> {
        self.iter().find(|e| e.is_current()).and_then(WindowEntry::number)
    }

    /// All page numbers in display order, gaps skipped
    pub fn page_numbers(&self) -> Vec<u64> {
        self.iter().filter_map(WindowEntry::number).collect()
    }

    /// Number of gap markers
    pub fn ellipsis_count(&self) -> usize {
        self.iter().filter(|e| e.is_ellipsis()).count()
    }

    /// Labels in display order, e.g. `["1", "...", "4", "5", "6", "...", "13"]`
    pub fn labels(&self) -> Vec<String> {
        self.iter().map(WindowEntry::label).collect()
    }
}

impl IntoIterator for Window {
    type Item = WindowEntry;
    type IntoIter = std::vec::IntoIter<WindowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Window {
    type Item = &'a WindowEntry;
    type IntoIter = std::slice::Iter<'a, WindowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
