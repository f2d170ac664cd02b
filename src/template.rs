//! Page URL templates
//!
//! A URL pattern carries the `(:num)` placeholder, e.g. `/posts/page/(:num)`
//! or `?page=(:num)`. Rendering replaces every occurrence with the decimal
//! page number. Nothing is escaped.

/// Placeholder token substituted with the page number
pub const NUM_PLACEHOLDER: &str = "(:num)";

/// URL pattern used when none is configured
pub const DEFAULT_URL_PATTERN: &str = "?page=(:num)";

/// Render a page URL from a pattern
pub fn render_page_url(pattern: &str, page: u64) -> String {
    pattern.replace(NUM_PLACEHOLDER, &page.to_string())
}

/// Check if a pattern contains the page placeholder
pub fn has_placeholder(pattern: &str) -> bool {
    pattern.contains(NUM_PLACEHOLDER)
}

/// Count placeholder occurrences in a pattern
pub fn count_placeholders(pattern: &str) -> usize {
    pattern.matches(NUM_PLACEHOLDER).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_query_pattern() {
        assert_eq!(render_page_url(DEFAULT_URL_PATTERN, 3), "?page=3");
    }

    #[test]
    fn test_render_path_pattern() {
        assert_eq!(
            render_page_url("/example/page(:num)", 12),
            "/example/page12"
        );
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let url = render_page_url("/p/(:num)?from=(:num)", 4);
        assert_eq!(url, "/p/4?from=4");
        assert_eq!(count_placeholders("/p/(:num)?from=(:num)"), 2);
    }

    #[test]
    fn test_render_without_placeholder_is_verbatim() {
        assert_eq!(render_page_url("/static", 9), "/static");
        assert!(!has_placeholder("/static"));
        assert_eq!(count_placeholders("/static"), 0);
    }

    #[test]
    fn test_render_does_not_escape() {
        assert_eq!(
            render_page_url("/search?q=a&b\"c&page=(:num)", 2),
            "/search?q=a&b\"c&page=2"
        );
    }

    #[test]
    fn test_page_number_recovered_from_suffix() {
        for page in [1_u64, 7, 42, 1_000_000] {
            let url = render_page_url("/example/page(:num)", page);
            let suffix = url.strip_prefix("/example/page").unwrap();
            assert_eq!(suffix.parse::<u64>().unwrap(), page);
        }
    }
}
