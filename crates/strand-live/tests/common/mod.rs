//! Shared fixture helpers for strand-live integration tests

#![allow(dead_code)]

use strand_dom::{Document, DomTree, NodeId};

/// Route `tracing` output to the test harness (`RUST_LOG=strand_live=trace`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fresh document with an empty html/head/body skeleton
pub fn document() -> Document {
    init_tracing();
    Document::default()
}

/// Build a detached `<tag attrs...>inner</tag>` element
pub fn tag(tree: &mut DomTree, name: &str, attrs: &[(&str, &str)], inner: &str) -> NodeId {
    let element = tree.create_element(name);
    for (attr, value) in attrs {
        tree.set_attribute(element, attr, value).expect("fresh element");
    }
    strand_html::parse_fragment(tree, element, inner).expect("fixture markup");
    element
}

/// Append `child` to the document body
pub fn append_to_body(doc: &mut Document, child: NodeId) {
    let body = doc.body();
    doc.tree_mut().append_child(body, child).expect("attach fixture");
}

pub fn inner_html(tree: &DomTree, node: NodeId) -> String {
    strand_html::get_inner_html(tree, node)
}
