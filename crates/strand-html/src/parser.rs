//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts the result into the arena tree.
//! Whitespace-only text is kept: containers fed by streamed markup carry it,
//! and the integrity checks need to see it.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use strand_dom::{Document, DomTree, Node, NodeData, NodeId};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let mut document = Document::empty();
        let root = document.tree().root();
        self.convert_children(&dom.document, document.tree_mut(), root);
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        document
    }

    /// Parse `html` as body content and append the result under `parent`
    ///
    /// Returns the top-level nodes that were inserted, in order.
    pub fn parse_fragment(
        &self,
        tree: &mut DomTree,
        parent: NodeId,
        html: &str,
    ) -> Result<Vec<NodeId>, ParseError> {
        if tree.get(parent).is_none() {
            return Err(ParseError::ParentNotFound(parent));
        }

        // Opening <body> up front keeps head-only tags (title, meta) in place
        let dom =
            parse_document(RcDom::default(), Default::default()).one(format!("<body>{html}"));
        let Some(body) = find_element(&dom.document, "body") else {
            return Ok(Vec::new());
        };

        let mut inserted = Vec::new();
        for child in body.children.borrow().iter() {
            if let Some(id) = self.convert_node(child, tree, parent) {
                inserted.push(id);
            }
        }

        tracing::trace!(?parent, count = inserted.len(), "fragment parsed");
        Ok(inserted)
    }

    fn convert_children(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        for child in handle.children.borrow().iter() {
            self.convert_node(child, tree, parent);
        }
    }

    /// Convert one RcDom node (and its subtree) under `parent`
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Option<NodeId> {
        let id = match &handle.data {
            RcNodeData::Document => {
                self.convert_children(handle, tree, parent);
                return None;
            }
            RcNodeData::Doctype {
                name,
                public_id,
                system_id,
            } => tree.push_node(Node::new(NodeData::Doctype {
                name: name.to_string(),
                public_id: public_id.to_string(),
                system_id: system_id.to_string(),
            })),
            RcNodeData::Text { contents } => tree.create_text(&contents.borrow()),
            RcNodeData::Comment { contents } => tree.create_comment(contents),
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    if let Err(err) = tree.set_attribute(id, &attr.name.local, &attr.value) {
                        tracing::debug!(%err, "dropping attribute {}", &*attr.name.local);
                    }
                }
                id
            }
            RcNodeData::ProcessingInstruction { .. } => return None,
        };

        if let Err(err) = tree.append_child(parent, id) {
            tracing::debug!(%err, "dropping node that could not be attached");
            return None;
        }
        self.convert_children(handle, tree, id);
        Some(id)
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let RcNodeData::Element { name, .. } = &child.data {
            if &*name.local == tag {
                return Some(child.clone());
            }
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html);

        assert!(doc.body().is_valid());
        assert_eq!(doc.title(), "Test");
    }

    #[test]
    fn test_fragment_keeps_whitespace() {
        let mut doc = Document::default();
        let body = doc.body();
        let nodes = HtmlParser::new()
            .parse_fragment(doc.tree_mut(), body, "<div id=\"1\"></div>\n\n<div id=\"2\"></div>")
            .unwrap();

        assert_eq!(nodes.len(), 3);
        assert_eq!(doc.tree().get(nodes[1]).unwrap().as_text(), Some("\n\n"));
    }

    #[test]
    fn test_fragment_bad_parent() {
        let mut tree = DomTree::new();
        let err = HtmlParser::new().parse_fragment(&mut tree, NodeId(42), "<p></p>");
        assert!(matches!(err, Err(ParseError::ParentNotFound(NodeId(42)))));
    }
}
