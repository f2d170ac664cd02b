//! Paginator state
//!
//! [`Paginator`] is an immutable value. `total_pages` is derived whenever the
//! value is built, and every `with_*` transformation returns a fresh value,
//! so the derived count can never lag behind the totals it came from.

use crate::config::{PaginatorConfig, DEFAULT_ITEMS_PER_PAGE};
use crate::error::Result;
use crate::render::Builder;
use crate::template::{has_placeholder, render_page_url, DEFAULT_URL_PATTERN};

/// Pagination state for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total_items: u64,
    items_per_page: u64,
    current_page: i64,
    url_pattern: String,
    total_pages: u64,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(0, DEFAULT_ITEMS_PER_PAGE, 1)
    }
}

impl Paginator {
    /// Create a paginator using the default `?page=(:num)` URL pattern
    pub fn new(total_items: u64, items_per_page: u64, current_page: i64) -> Self {
        Self::with_parts(
            total_items,
            items_per_page,
            current_page,
            DEFAULT_URL_PATTERN.to_string(),
        )
    }

    /// Create a paginator from a config record without validating it
    pub fn from_config(config: &PaginatorConfig) -> Self {
        if !has_placeholder(&config.url_pattern) {
            tracing::warn!(
                "URL pattern '{}' has no (:num) placeholder; every page link will be identical",
                config.url_pattern
            );
        }

        Self::with_parts(
            config.total_items,
            config.items_per_page,
            config.current_page,
            config.url_pattern.clone(),
        )
    }

    /// Validate a config record, then create a paginator from it
    pub fn try_from_config(config: &PaginatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn with_parts(
        total_items: u64,
        items_per_page: u64,
        current_page: i64,
        url_pattern: String,
    ) -> Self {
        Self {
            total_items,
            items_per_page,
            current_page,
            url_pattern,
            total_pages: derive_total_pages(total_items, items_per_page),
        }
    }

    // ------------------------------------------------------------------------
    // Transformations
    // ------------------------------------------------------------------------

    /// Return a copy with a new item total
    #[must_use]
    pub fn with_total_items(self, total_items: u64) -> Self {
        Self::with_parts(
            total_items,
            self.items_per_page,
            self.current_page,
            self.url_pattern,
        )
    }

    /// Return a copy with a new page size
    #[must_use]
    pub fn with_items_per_page(self, items_per_page: u64) -> Self {
        Self::with_parts(
            self.total_items,
            items_per_page,
            self.current_page,
            self.url_pattern,
        )
    }

    /// Return a copy pointing at another page
    #[must_use]
    pub fn with_current_page(self, current_page: i64) -> Self {
        Self {
            current_page,
            ..self
        }
    }

    /// Return a copy with another URL pattern
    #[must_use]
    pub fn with_url_pattern(self, url_pattern: impl Into<String>) -> Self {
        Self {
            url_pattern: url_pattern.into(),
            ..self
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn url_pattern(&self) -> &str {
        &self.url_pattern
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Page after the current one, if it exists
    pub fn next_page(&self) -> Option<u64> {
        self.page_in_range(self.current_page.checked_add(1)?)
    }

    /// Page before the current one, if it exists
    pub fn prev_page(&self) -> Option<u64> {
        self.page_in_range(self.current_page.checked_sub(1)?)
    }

    pub fn next_url(&self) -> Option<String> {
        self.next_page().map(|page| self.page_url(page))
    }

    pub fn prev_url(&self) -> Option<String> {
        self.prev_page().map(|page| self.page_url(page))
    }

    /// URL for a page, substituting every `(:num)` in the pattern
    pub fn page_url(&self, page: u64) -> String {
        render_page_url(&self.url_pattern, page)
    }

    fn page_in_range(&self, page: i64) -> Option<u64> {
        let page = u64::try_from(page).ok()?;
        (1..=self.total_pages).contains(&page).then_some(page)
    }

    // ------------------------------------------------------------------------
    // Item ranges
    // ------------------------------------------------------------------------

    /// Zero-based offset of the first item on the current page
    ///
    /// Suitable for `LIMIT`/`OFFSET` queries or slicing. `None` when the
    /// current page is below 1.
    pub fn current_page_offset(&self) -> Option<u64> {
        let page = u64::try_from(self.current_page).ok()?.checked_sub(1)?;
        page.checked_mul(self.items_per_page)
    }

    /// 1-based number of the first item on the current page
    pub fn current_page_first_item_number(&self) -> Option<u64> {
        if self.items_per_page == 0 {
            return None;
        }

        let first = self.current_page_offset()?.checked_add(1)?;
        (first <= self.total_items).then_some(first)
    }

    /// 1-based number of the last item on the current page
    pub fn current_page_last_item_number(&self) -> Option<u64> {
        let first = self.current_page_first_item_number()?;
        let last = first.saturating_add(self.items_per_page - 1);
        Some(last.min(self.total_items))
    }

    /// Start building the navigation control for this paginator
    pub fn builder(&self, max_visible: usize) -> Builder<'_> {
        Builder::new(self, max_visible)
    }
}

impl From<&PaginatorConfig> for Paginator {
    fn from(config: &PaginatorConfig) -> Self {
        Self::from_config(config)
    }
}

fn derive_total_pages(total_items: u64, items_per_page: u64) -> u64 {
    if items_per_page == 0 {
        0
    } else {
        total_items.div_ceil(items_per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn fixture() -> Paginator {
        Paginator::new(100, 10, 5).with_url_pattern("/example/page(:num)")
    }

    #[test_case(0, 10, 0 ; "no items")]
    #[test_case(1, 10, 1 ; "single item")]
    #[test_case(100, 10, 10 ; "exact multiple")]
    #[test_case(95, 10, 10 ; "partial last page")]
    #[test_case(101, 10, 11 ; "one over")]
    #[test_case(50, 0, 0 ; "zero page size")]
    fn test_total_pages(total_items: u64, items_per_page: u64, expected: u64) {
        assert_eq!(
            Paginator::new(total_items, items_per_page, 1).total_pages(),
            expected
        );
    }

    #[test]
    fn test_total_pages_rederived_on_transform() {
        let paginator = fixture();
        assert_eq!(paginator.total_pages(), 10);

        let paginator = paginator.with_total_items(250);
        assert_eq!(paginator.total_pages(), 25);

        let paginator = paginator.with_items_per_page(100);
        assert_eq!(paginator.total_pages(), 3);

        let paginator = paginator.with_items_per_page(0);
        assert_eq!(paginator.total_pages(), 0);
    }

    #[test]
    fn test_transforms_keep_other_fields() {
        let paginator = fixture().with_current_page(7).with_total_items(300);
        assert_eq!(paginator.current_page(), 7);
        assert_eq!(paginator.items_per_page(), 10);
        assert_eq!(paginator.url_pattern(), "/example/page(:num)");
    }

    #[test]
    fn test_current_page_not_clamped() {
        assert_eq!(fixture().with_current_page(99).current_page(), 99);
        assert_eq!(fixture().with_current_page(-3).current_page(), -3);
    }

    #[test]
    fn test_next_page() {
        let paginator = fixture().with_current_page(1);
        assert_eq!(paginator.next_page(), Some(2));

        let last = paginator.total_pages() as i64;
        assert_eq!(fixture().with_current_page(last).next_page(), None);
    }

    #[test]
    fn test_prev_page() {
        assert_eq!(fixture().with_current_page(2).prev_page(), Some(1));
        assert_eq!(fixture().with_current_page(1).prev_page(), None);
    }

    #[test]
    fn test_adjacent_pages_out_of_range() {
        // current page far past the end: neither neighbour is a real page
        let paginator = fixture().with_current_page(50);
        assert_eq!(paginator.next_page(), None);
        assert_eq!(paginator.prev_page(), None);

        // one past the end: previous lands on the last page
        assert_eq!(fixture().with_current_page(11).prev_page(), Some(10));

        assert_eq!(fixture().with_current_page(0).next_page(), Some(1));
        assert_eq!(fixture().with_current_page(-4).next_page(), None);
        assert_eq!(fixture().with_current_page(i64::MAX).next_page(), None);
        assert_eq!(fixture().with_current_page(i64::MIN).prev_page(), None);
    }

    #[test]
    fn test_no_pages_means_no_neighbours() {
        let paginator = Paginator::new(0, 10, 1);
        assert_eq!(paginator.next_page(), None);
        assert_eq!(paginator.prev_page(), None);
    }

    #[test]
    fn test_next_url() {
        let paginator = fixture().with_current_page(1);
        assert_eq!(paginator.next_url().as_deref(), Some("/example/page2"));
        assert_eq!(fixture().with_current_page(10).next_url(), None);
    }

    #[test]
    fn test_prev_url() {
        let paginator = fixture().with_current_page(2);
        assert_eq!(paginator.prev_url().as_deref(), Some("/example/page1"));
        assert_eq!(fixture().with_current_page(1).prev_url(), None);
    }

    #[test]
    fn test_page_url_default_pattern() {
        assert_eq!(Paginator::new(10, 1, 1).page_url(4), "?page=4");
    }

    #[test_case(95, 10, 1, Some(1), Some(10) ; "first page")]
    #[test_case(95, 10, 2, Some(11), Some(20) ; "second page")]
    #[test_case(95, 10, 10, Some(91), Some(95) ; "short last page")]
    #[test_case(95, 10, 11, None, None ; "past the end")]
    #[test_case(95, 10, 0, None, None ; "page zero")]
    #[test_case(95, 10, -1, None, None ; "negative page")]
    #[test_case(95, 0, 1, None, None ; "zero page size")]
    #[test_case(0, 10, 1, None, None ; "no items")]
    fn test_item_range(
        total_items: u64,
        items_per_page: u64,
        current_page: i64,
        first: Option<u64>,
        last: Option<u64>,
    ) {
        let paginator = Paginator::new(total_items, items_per_page, current_page);
        assert_eq!(paginator.total_items(), total_items);
        assert_eq!(paginator.current_page_first_item_number(), first);
        assert_eq!(paginator.current_page_last_item_number(), last);
    }

    #[test]
    fn test_current_page_offset() {
        assert_eq!(Paginator::new(95, 10, 1).current_page_offset(), Some(0));
        assert_eq!(Paginator::new(95, 10, 3).current_page_offset(), Some(20));
        assert_eq!(Paginator::new(95, 10, 0).current_page_offset(), None);
        assert_eq!(
            Paginator::new(95, u64::MAX, i64::MAX).current_page_offset(),
            None
        );
    }

    #[test]
    fn test_from_config() {
        let config = PaginatorConfig::new(20, 3, 2).with_url_pattern("/p/(:num)");
        let paginator = Paginator::from(&config);
        assert_eq!(paginator.total_pages(), 7);
        assert_eq!(paginator.current_page(), 2);
        assert_eq!(paginator.page_url(7), "/p/7");
    }

    #[test]
    fn test_try_from_config_validates() {
        let config = PaginatorConfig::new(20, 3, 2).with_url_pattern("/p");
        assert!(Paginator::try_from_config(&config).is_err());

        // unvalidated construction still works, links just repeat
        let paginator = Paginator::from_config(&config);
        assert_eq!(paginator.page_url(3), "/p");
    }

    #[test]
    fn test_default() {
        let paginator = Paginator::default();
        assert_eq!(paginator.total_pages(), 0);
        assert_eq!(paginator.current_page(), 1);
        assert_eq!(paginator.url_pattern(), "?page=(:num)");
    }
}
