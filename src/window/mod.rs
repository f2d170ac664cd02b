//! Page window computation
//!
//! Decides which page numbers and gap markers a navigation control shows
//! for a given visibility budget.
//!
//! # Overview
//!
//! When every page fits in the budget, all of them are listed. Otherwise the
//! first and last pages stay pinned, a sliding range of interior pages is
//! centred on the current page, and ellipses fill whatever gaps remain.
//!
//! ```text
//! total=13 current=2  max_visible=5   [1] 2 3 4 … 13
//! total=13 current=5  max_visible=5    1 … 4 [5] 6 … 13
//! total=13 current=11 max_visible=5    1 … 10 [11] 12 13
//! ```

mod types;
mod windower;

pub use types::{Window, WindowEntry, ELLIPSIS};
pub use windower::{compute_window, sliding_range};
