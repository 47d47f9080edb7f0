//! Document - High-level document API

use crate::{DomResult, DomTree, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document with an empty html/head/body skeleton
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        for (parent, child) in [(tree.root(), html), (html, head), (html, body)] {
            if let Err(err) = tree.append_child(parent, child) {
                tracing::debug!(%err, "document skeleton incomplete");
            }
        }

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate html/head/body after the tree was filled in externally
    pub fn finalize(&mut self) {
        let root = self.tree.root();
        self.html_element = self.find_child(root, "html").unwrap_or(NodeId::NONE);
        if self.html_element.is_valid() {
            self.head_element = self.find_child(self.html_element, "head").unwrap_or(NodeId::NONE);
            self.body_element = self.find_child(self.html_element, "body").unwrap_or(NodeId::NONE);
        }
        tracing::trace!(
            html = ?self.html_element,
            head = ?self.head_element,
            body = ?self.body_element,
            "document finalized"
        );
    }

    fn find_child(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.tree
            .children(parent)
            .map(|(id, _)| id)
            .find(|&id| self.tree.is_element_named(id, tag))
    }

    /// First `<title>` element in document order
    pub fn title_element(&self) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .map(|(id, _)| id)
            .find(|&id| self.tree.is_element_named(id, "title"))
    }

    /// Document title with whitespace collapsed, or empty if there is none
    pub fn title(&self) -> String {
        match self.title_element() {
            Some(title) => self
                .tree
                .text_content(title)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" "),
            None => String::new(),
        }
    }

    /// Replace the document title
    ///
    /// Creates a `<title>` in `<head>` when the document has none.
    pub fn set_title(&mut self, title: &str) -> DomResult<()> {
        let element = match self.title_element() {
            Some(element) => element,
            None => {
                let parent = if self.head_element.is_valid() {
                    self.head_element
                } else {
                    self.tree.root()
                };
                let element = self.tree.create_element("title");
                self.tree.append_child(parent, element)?
            }
        };
        self.tree.set_text_content(element, title)
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID (first match in document order)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .map(|(node, _)| node)
            .find(|&node| self.tree.get_attribute(node, "id") == Some(id))
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
