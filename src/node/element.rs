//! Element and node types

use std::fmt;

/// Supported element names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeName {
    Nav,
    Div,
    Ul,
    Ol,
    Li,
    A,
    Span,
}

impl NodeName {
    /// Tag name as written in markup
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nav => "nav",
            Self::Div => "div",
            Self::Ul => "ul",
            Self::Ol => "ol",
            Self::Li => "li",
            Self::A => "a",
            Self::Span => "span",
        }
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Class List
// ============================================================================

/// Ordered set of class names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one or more whitespace-separated classes, skipping duplicates
    pub fn add(&mut self, classes: &str) -> &mut Self {
        for class in classes.split_whitespace() {
            if !self.contains(class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    /// Remove a class if present
    pub fn remove(&mut self, class: &str) -> &mut Self {
        self.classes.retain(|c| c != class);
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn clear(&mut self) {
        self.classes.clear();
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// A node in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Raw text, emitted as-is
    Text(String),
}

impl Node {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Serialize this node; see [`Element::render`]
    pub fn render(&self, indent: Option<usize>) -> String {
        let mut out = String::new();
        self.write_to(&mut out, indent, 0);
        out
    }

    fn write_to(&self, out: &mut String, indent: Option<usize>, depth: usize) {
        match self {
            Self::Element(element) => element.write_to(out, indent, depth),
            Self::Text(text) => out.push_str(text),
        }
    }

    fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// An element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: NodeName,
    class_list: ClassList,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: NodeName) -> Self {
        Self {
            name,
            class_list: ClassList::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style [`set_attribute`](Self::set_attribute)
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute, replacing any previous value
    ///
    /// `class` replaces the class list with the given whitespace-separated
    /// names.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();

        if name == "class" {
            self.class_list.clear();
            self.class_list.add(&value);
            return self;
        }

        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
        self
    }

    /// Attribute value; `class` is read back from the class list
    pub fn attribute(&self, name: &str) -> Option<String> {
        if name == "class" {
            return (!self.class_list.is_empty()).then(|| self.class_list.to_string());
        }

        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn name(&self) -> NodeName {
        self.name
    }

    pub fn class_list(&self) -> &ClassList {
        &self.class_list
    }

    pub fn class_list_mut(&mut self) -> &mut ClassList {
        &mut self.class_list
    }

    pub fn append_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Serialize to markup
    ///
    /// `None` renders compactly on one line. `Some(n)` puts each child
    /// element on its own line, indented `n` spaces per level; elements whose
    /// children are all text stay on one line.
    pub fn render(&self, indent: Option<usize>) -> String {
        let mut out = String::new();
        self.write_to(&mut out, indent, 0);
        out
    }

    fn write_to(&self, out: &mut String, indent: Option<usize>, depth: usize) {
        out.push('<');
        out.push_str(self.name.as_str());

        if !self.class_list.is_empty() {
            push_attribute(out, "class", &self.class_list.to_string());
        }
        for (name, value) in &self.attributes {
            push_attribute(out, name, value);
        }
        out.push('>');

        let step = indent.filter(|_| !self.children.iter().all(Node::is_text));
        match step {
            Some(step) => {
                for child in &self.children {
                    push_newline(out, step * (depth + 1));
                    child.write_to(out, indent, depth + 1);
                }
                push_newline(out, step * depth);
            }
            None => {
                for child in &self.children {
                    child.write_to(out, indent, depth + 1);
                }
            }
        }

        out.push_str("</");
        out.push_str(self.name.as_str());
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

fn push_newline(out: &mut String, width: usize) {
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(width));
}
