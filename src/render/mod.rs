//! Navigation markup
//!
//! Maps window entries to [`RenderItem`]s and assembles them into a
//! Bootstrap-style node tree:
//!
//! ```text
//! nav.navigation[aria-label="page navigation"]
//! └── ul.pagination
//!     ├── li.page-item            > a.page-link[href]     (prev)
//!     ├── li.page-item.active     > a.page-link[href]     (current page)
//!     ├── li.page-item.disabled   > span.page-link        (ellipsis)
//!     └── li.page-item            > a.page-link[href]     (next)
//! ```

mod builder;
mod item;

pub use builder::{Builder, DEFAULT_NEXT_LABEL, DEFAULT_PREV_LABEL};
pub use item::{Label, RenderItem};
