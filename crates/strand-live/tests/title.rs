//! Title formatting tests

mod common;

use strand_dom::Document;
use strand_live::{Bindings, TitleConfig, put_title};

/// Document whose head holds `<title>` with the given data attributes
fn with_title(attrs: &[(&str, &str)]) -> Document {
    let mut doc = common::document();
    let head = doc.head();
    let tree = doc.tree_mut();
    let title = common::tag(tree, "title", attrs, "");
    tree.append_child(head, title).expect("attach title");
    doc
}

#[test]
fn test_put_title_with_no_attributes() {
    let mut doc = with_title(&[]);
    put_title(&mut doc, "My Title", &Bindings::default());
    assert_eq!(doc.title(), "My Title");
}

#[test]
fn test_put_title_with_prefix() {
    let mut doc = with_title(&[("data-prefix", "PRE ")]);
    put_title(&mut doc, "My Title", &Bindings::default());
    assert_eq!(doc.title(), "PRE My Title");
}

#[test]
fn test_put_title_with_suffix() {
    let mut doc = with_title(&[("data-suffix", " POST")]);
    put_title(&mut doc, "My Title", &Bindings::default());
    assert_eq!(doc.title(), "My Title POST");
}

#[test]
fn test_put_title_with_prefix_and_suffix() {
    let mut doc = with_title(&[("data-prefix", "PRE "), ("data-suffix", " POST")]);
    let bindings = Bindings::default();

    let first = put_title(&mut doc, "My Title", &bindings);
    let second = put_title(&mut doc, "My Title", &bindings);

    assert_eq!(first.as_deref(), Some("PRE My Title POST"));
    assert_eq!(first, second);
    assert_eq!(doc.title(), "PRE My Title POST");
}

#[test]
fn test_blank_title_falls_back_to_default() {
    let mut doc = with_title(&[("data-default", "Home"), ("data-suffix", " | App")]);
    put_title(&mut doc, "  ", &Bindings::default());
    assert_eq!(doc.title(), "Home | App");
}

#[test]
fn test_blank_title_without_default_is_ignored() {
    let mut doc = with_title(&[("data-prefix", "PRE ")]);
    let bindings = Bindings::default();
    put_title(&mut doc, "Kept", &bindings);

    assert_eq!(put_title(&mut doc, "", &bindings), None);
    assert_eq!(doc.title(), "PRE Kept");
}

#[test]
fn test_put_title_without_title_element() {
    let mut doc = common::document();
    put_title(&mut doc, "Fresh", &Bindings::default());

    let element = doc.title_element().expect("title created");
    assert_eq!(doc.tree().parent(element), Some(doc.head()));
    assert_eq!(doc.title(), "Fresh");
}

#[test]
fn test_title_config_from_parsed_head() {
    let doc = strand_html::parse(r#"<head><title data-prefix="[dev] ">x</title></head>"#);
    let element = doc.title_element().expect("title");
    let config = TitleConfig::from_element(doc.tree(), element, &Bindings::default());

    assert_eq!(config.prefix, "[dev] ");
    assert_eq!(config.suffix, "");
    assert_eq!(config.default, None);
}
