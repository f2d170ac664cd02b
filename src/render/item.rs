//! Render items
//!
//! A [`RenderItem`] is one `li` of the control: a page link, a gap, or a
//! prev/next arrow. Its constructors keep `url` and `disabled` in lockstep.

use crate::node::{Element, Node, NodeName};
use crate::window::{WindowEntry, ELLIPSIS};
use crate::Paginator;
use serde::{Serialize, Serializer};

/// Content of an item: plain text or a prebuilt node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Text(String),
    Node(Node),
}

impl Label {
    pub fn text(text: impl ToString) -> Self {
        Self::Text(text.to_string())
    }

    /// Label as markup
    pub fn to_markup(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Node(node) => node.render(None),
        }
    }

    fn to_node(&self) -> Node {
        match self {
            Self::Text(text) => Node::text(text.clone()),
            Self::Node(node) => node.clone(),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Label {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Element> for Label {
    fn from(element: Element) -> Self {
        Self::Node(Node::Element(element))
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_markup())
    }
}

/// One entry of the navigation control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderItem {
    url: Option<String>,
    label: Label,
    active: bool,
    disabled: bool,
}

impl RenderItem {
    /// A navigable item
    pub fn link(url: impl Into<String>, label: impl Into<Label>, active: bool) -> Self {
        Self {
            url: Some(url.into()),
            label: label.into(),
            active,
            disabled: false,
        }
    }

    /// A disabled, non-navigable item
    pub fn placeholder(label: impl Into<Label>) -> Self {
        Self {
            url: None,
            label: label.into(),
            active: false,
            disabled: true,
        }
    }

    /// Map a window entry using the paginator's URL pattern
    pub fn from_entry(entry: &WindowEntry, paginator: &Paginator) -> Self {
        match *entry {
            WindowEntry::Page { number, is_current } => {
                Self::link(paginator.page_url(number), Label::text(number), is_current)
            }
            WindowEntry::Ellipsis => Self::placeholder(ELLIPSIS),
        }
    }

    /// A prev/next control: a link when a target exists, otherwise a placeholder
    pub fn control(target: Option<u64>, label: Label, paginator: &Paginator) -> Self {
        match target {
            Some(page) => Self::link(paginator.page_url(page), label, false),
            None => Self::placeholder(label),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Build the `li.page-item` element for this item
    pub fn create_element(&self) -> Element {
        let mut item = Element::new(NodeName::Li).with_attribute("class", "page-item");

        let mut link = match &self.url {
            Some(url) => Element::new(NodeName::A)
                .with_attribute("class", "page-link")
                .with_attribute("href", url.as_str()),
            None => Element::new(NodeName::Span).with_attribute("class", "page-link"),
        };

        if self.disabled {
            item.class_list_mut().add("disabled");
        }

        if self.active {
            item.class_list_mut().add("active");
            item.set_attribute("aria-current", "page");
        }

        link.append_child(self.label.to_node());
        item.append_child(link);
        item
    }
}
