//! Sliding window algorithm

use super::types::Window;
use tracing::trace;

/// Compute the page window for a navigation control
///
/// `max_visible` is the slot budget, counting the first and last page and
/// any ellipses. Zero is treated as one. `current_page` may lie outside
/// `1..=total_pages`; the window is still computed but nothing is marked
/// current.
pub fn compute_window(total_pages: u64, current_page: i64, max_visible: usize) -> Window {
    let max_visible = max_visible.max(1);

    let window = if total_pages <= 1 {
        Window::new()
    } else if total_pages <= max_visible as u64 {
        let mut window = Window::with_capacity(total_pages as usize);
        for number in 1..=total_pages {
            window.push_page(number, current_page);
        }
        window
    } else {
        sliding_window(total_pages, current_page, max_visible)
    };

    trace!(
        "Computed window (total_pages={}, current_page={}, max_visible={}): {:?}",
        total_pages,
        current_page,
        max_visible,
        window.labels()
    );

    window
}

/// Interior page range `(start, end)` shown between the first and last page
///
/// Only meaningful when `total_pages > max_visible`. The range is empty
/// (`end < start`) when the budget is too small to hold any interior page.
pub fn sliding_range(total_pages: u64, current_page: i64, max_visible: usize) -> (i64, i64) {
    let last = i64::try_from(total_pages).unwrap_or(i64::MAX);
    // slots left for interior pages once first, last and one gap are spent
    let span = i64::try_from(max_visible)
        .unwrap_or(i64::MAX)
        .saturating_sub(3);
    let num_adjacent = span.div_euclid(2);

    let start = current_page.saturating_sub(num_adjacent).max(2);
    let end = start.saturating_add(span).min(last - 1);
    // pull the start back so the range keeps its full width near the end
    let start = end.saturating_sub(span).max(2);

    (start, end)
}

fn sliding_window(total_pages: u64, current_page: i64, max_visible: usize) -> Window {
    let last = i64::try_from(total_pages).unwrap_or(i64::MAX);
    let (start, end) = sliding_range(total_pages, current_page, max_visible);

    if end < start {
        // no room for interior pages: one gap stands in for all of them
        let mut window = Window::with_capacity(3);
        window.push_page(1, current_page);
        if total_pages > 2 {
            window.push_ellipsis();
        }
        window.push_page(total_pages, current_page);
        return window;
    }

    let interior = usize::try_from(end - start + 1).unwrap_or(0);
    let mut window = Window::with_capacity(interior + 4);

    window.push_page(1, current_page);

    if start > 2 {
        window.push_ellipsis();
    }

    for number in start..=end {
        window.push_page(number as u64, current_page);
    }

    if end < last - 1 {
        window.push_ellipsis();
    }

    window.push_page(total_pages, current_page);
    window
}
