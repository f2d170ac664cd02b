//! Markup node tree
//!
//! A deliberately small element tree: tag names, ordered attributes, a class
//! list, children, and a `render` that serializes to a string. Text nodes are
//! written verbatim, so callers can pass entities like `&laquo;` straight
//! through.

mod element;

pub use element::{ClassList, Element, Node, NodeName};

#[cfg(test)]
mod tests;
