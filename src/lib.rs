//! # pagenav
//!
//! Sliding-window page navigation for server-rendered pages.
//!
//! Given a total item count, a page size and the current page, pagenav works
//! out which page links a pagination control should show under a slot budget
//! and renders them as Bootstrap-style markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagenav::Paginator;
//!
//! let paginator = Paginator::new(130, 10, 5).with_url_pattern("/posts?page=(:num)");
//!
//! assert_eq!(paginator.total_pages(), 13);
//! assert_eq!(paginator.next_url().as_deref(), Some("/posts?page=6"));
//!
//! let builder = paginator.builder(5);
//! let labels: Vec<String> = builder.items().iter().map(|i| i.label().to_markup()).collect();
//! assert_eq!(labels, ["1", "...", "4", "5", "6", "...", "13"]);
//!
//! let html = builder.render(None);
//! assert!(html.starts_with(r#"<nav class="navigation""#));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌────────────┐   ┌──────────────┐   ┌─────────────┐
//! │ PaginatorConfig  │──▶│ Paginator  │──▶│    window    │──▶│   render    │──▶ String
//! │ yaml/json/file   │   │ total_pages│   │ sliding range│   │ RenderItem  │
//! └──────────────────┘   │ prev/next  │   │ Page/Ellipsis│   │ Builder     │
//!                        │ page_url   │   └──────────────┘   │  └─ node    │
//!                        └────────────┘                      └─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page URL templates
pub mod template;

/// Paginator configuration and loading
pub mod config;

/// Paginator state
pub mod paginator;

/// Page window computation
pub mod window;

/// Markup node tree
pub mod node;

/// Navigation markup assembly
pub mod render;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, PaginatorConfig};
pub use error::{Error, Result};
pub use paginator::Paginator;
pub use render::{Builder, Label, RenderItem};
pub use window::{compute_window, Window, WindowEntry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
