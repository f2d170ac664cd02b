//! Tests for node module

use super::*;
use pretty_assertions::assert_eq;

fn sample_list() -> Element {
    let mut item = Element::new(NodeName::Li).with_attribute("class", "page-item");
    item.append_child(
        Element::new(NodeName::A)
            .with_attribute("class", "page-link")
            .with_attribute("href", "?page=1"),
    );

    let mut link = Element::new(NodeName::A).with_attribute("href", "?page=2");
    link.append_child("2");
    let mut second = Element::new(NodeName::Li);
    second.append_child(link);

    let mut list = Element::new(NodeName::Ul).with_attribute("class", "pagination");
    list.append_child(item).append_child(second);
    list
}

// ============================================================================
// Attributes and Classes
// ============================================================================

#[test]
fn test_node_name_as_str() {
    assert_eq!(NodeName::Nav.as_str(), "nav");
    assert_eq!(NodeName::Ol.to_string(), "ol");
    assert_eq!(NodeName::Span.as_str(), "span");
}

#[test]
fn test_set_attribute_replaces_value() {
    let mut element = Element::new(NodeName::A).with_attribute("href", "/a");
    element.set_attribute("href", "/b");
    assert_eq!(element.attribute("href").as_deref(), Some("/b"));
    assert_eq!(element.render(None), r#"<a href="/b"></a>"#);
}

#[test]
fn test_class_attribute_feeds_class_list() {
    let mut element = Element::new(NodeName::Li).with_attribute("class", "page-item  active");
    assert!(element.class_list().contains("page-item"));
    assert!(element.class_list().contains("active"));
    assert_eq!(element.class_list().len(), 2);

    element.class_list_mut().add("disabled").add("active");
    assert_eq!(
        element.attribute("class").as_deref(),
        Some("page-item active disabled")
    );

    element.class_list_mut().remove("active");
    assert_eq!(element.class_list().iter().collect::<Vec<_>>(), vec!["page-item", "disabled"]);
}

#[test]
fn test_class_attribute_absent_when_empty() {
    let element = Element::new(NodeName::Span);
    assert!(!element.has_attribute("class"));
    assert_eq!(element.render(None), "<span></span>");
}

#[test]
fn test_class_rendered_before_other_attributes() {
    let mut element = Element::new(NodeName::Li);
    element.set_attribute("aria-current", "page");
    element.class_list_mut().add("page-item");
    assert_eq!(
        element.render(None),
        r#"<li class="page-item" aria-current="page"></li>"#
    );
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_compact() {
    assert_eq!(
        sample_list().render(None),
        concat!(
            r#"<ul class="pagination">"#,
            r#"<li class="page-item"><a class="page-link" href="?page=1"></a></li>"#,
            r#"<li><a href="?page=2">2</a></li>"#,
            "</ul>"
        )
    );
}

#[test]
fn test_render_indented() {
    let expected = [
        r#"<ul class="pagination">"#,
        r#"  <li class="page-item">"#,
        r#"    <a class="page-link" href="?page=1"></a>"#,
        r#"  </li>"#,
        r#"  <li>"#,
        r#"    <a href="?page=2">2</a>"#,
        r#"  </li>"#,
        r#"</ul>"#,
    ]
    .join("\n");
    assert_eq!(sample_list().render(Some(2)), expected);
}

#[test]
fn test_render_text_verbatim() {
    let mut span = Element::new(NodeName::Span);
    span.append_child(Node::text("&laquo;")).append_child(" <b>");
    assert_eq!(span.render(Some(4)), "<span>&laquo; <b></span>");
}

#[test]
fn test_display_matches_compact_render() {
    let list = sample_list();
    assert_eq!(list.to_string(), list.render(None));
    assert_eq!(Node::from(list.clone()).to_string(), list.render(None));
    assert_eq!(Node::from("x".to_string()).render(Some(2)), "x");
}

#[test]
fn test_child_elements_skips_text() {
    let mut element = Element::new(NodeName::Div);
    element
        .append_child("lead")
        .append_child(Element::new(NodeName::Span))
        .append_child("tail");
    assert_eq!(element.children().len(), 3);
    let names: Vec<NodeName> = element.child_elements().map(Element::name).collect();
    assert_eq!(names, vec![NodeName::Span]);
}
