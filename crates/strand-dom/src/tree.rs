//! DOM Tree (arena-based allocation)

use crate::{
    Ancestors, Children, Descendants, DomError, DomResult, InternedString, Node, NodeData,
    NodeId, StringInterner,
};

/// Arena-based DOM tree
///
/// Slot 0 is always the document node. Removed nodes stay in the arena
/// (detached) so outstanding `NodeId`s never dangle.
#[derive(Debug)]
pub struct DomTree {
    pub(crate) nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree containing only the document node
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::document());
        Self {
            nodes,
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve an interned name
    #[inline]
    pub fn resolve(&self, id: InternedString) -> &str {
        self.interner.get(id)
    }

    // ---- node creation ----

    /// Add a detached node to the arena
    pub fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = self.interner.intern(tag);
        self.push_node(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push_node(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push_node(Node::new(NodeData::Comment(content.to_string())))
    }

    // ---- structure ----

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.to_option())
    }

    /// Append `child` as the last child of `parent`
    ///
    /// The child is detached from its current position first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` under `parent` before `reference` (or at the end)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        self.check(parent)?;
        self.check(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if let Some(reference) = reference {
            self.check(reference)?;
            if self.nodes[reference.0 as usize].parent != parent || reference == child {
                return Err(DomError::NotAChild { parent, child: reference });
            }
        }

        self.unlink(child);

        let next = reference.unwrap_or(NodeId::NONE);
        let prev = if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling
        } else {
            self.nodes[parent.0 as usize].last_child
        };

        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }

        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = child;
        } else {
            self.nodes[parent.0 as usize].last_child = child;
        }

        Ok(child)
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check(parent)?;
        self.check(child)?;
        if self.nodes[child.0 as usize].parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }
        self.unlink(child);
        Ok(child)
    }

    /// Detach a node from wherever it is attached
    pub fn remove(&mut self, id: NodeId) -> DomResult<NodeId> {
        self.check(id)?;
        self.unlink(id);
        Ok(id)
    }

    /// Remove every child of `id`
    pub fn clear_children(&mut self, id: NodeId) -> DomResult<()> {
        self.check(id)?;
        let children: Vec<NodeId> = self.children(id).map(|(child, _)| child).collect();
        for child in children {
            self.unlink(child);
        }
        Ok(())
    }

    fn check(&self, id: NodeId) -> DomResult<()> {
        if (id.0 as usize) < self.nodes.len() {
            Ok(())
        } else {
            Err(DomError::NotFound(id))
        }
    }

    fn unlink(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.0 as usize];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        } else {
            self.nodes[parent.0 as usize].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        } else {
            self.nodes[parent.0 as usize].last_child = prev;
        }

        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    // ---- traversal ----

    /// Direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children::new(self, id)
    }

    /// Descendants of a node in document order (the node itself excluded)
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants::new(self, id)
    }

    /// Ancestors of a node, nearest first (the node itself excluded)
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors::new(self, id)
    }

    /// Whether `node` is `ancestor` or lies inside it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|id| id == ancestor)
    }

    // ---- element helpers ----

    /// Tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| self.resolve(e.name))
    }

    /// Whether `id` is an element with the given tag name
    pub fn is_element_named(&self, id: NodeId, tag: &str) -> bool {
        match (self.get(id).and_then(Node::as_element), self.interner.lookup(tag)) {
            (Some(elem), Some(name)) => elem.name == name,
            _ => false,
        }
    }

    /// Read an attribute by name
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = self.interner.lookup(name)?;
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Whether an attribute is present, whatever its value
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        let Some(name) = self.interner.lookup(name) else {
            return false;
        };
        self.get(id)
            .and_then(Node::as_element)
            .is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute (no-op on non-elements)
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.check(id)?;
        let name = self.interner.intern(name);
        if let Some(elem) = self.nodes[id.0 as usize].as_element_mut() {
            elem.set_attr(name, value.to_string());
        }
        Ok(())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            out.push_str(text);
        }
        for (_, node) in self.descendants(id) {
            if let Some(text) = node.as_text() {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace all children of `id` with a single text node
    pub fn set_text_content(&mut self, id: NodeId, content: &str) -> DomResult<()> {
        self.clear_children(id)?;
        if !content.is_empty() {
            let text = self.create_text(content);
            self.append_child(id, text)?;
        }
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(tree: &DomTree, parent: NodeId) -> Vec<NodeId> {
        tree.children(parent).map(|(id, _)| id).collect()
    }

    #[test]
    fn test_insert_before() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        let c = tree.create_element("li");
        tree.append_child(tree.root(), ul).unwrap();
        tree.append_child(ul, a).unwrap();
        tree.append_child(ul, c).unwrap();
        tree.insert_before(ul, b, Some(c)).unwrap();

        assert_eq!(list(&tree, ul), vec![a, b, c]);
    }

    #[test]
    fn test_append_moves_node() {
        let mut tree = DomTree::new();
        let first = tree.create_element("div");
        let second = tree.create_element("div");
        let child = tree.create_element("span");
        tree.append_child(tree.root(), first).unwrap();
        tree.append_child(tree.root(), second).unwrap();
        tree.append_child(first, child).unwrap();
        tree.append_child(second, child).unwrap();

        assert!(list(&tree, first).is_empty());
        assert_eq!(list(&tree, second), vec![child]);
        assert_eq!(tree.parent(child), Some(second));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(tree.root(), outer).unwrap();
        tree.append_child(outer, inner).unwrap();

        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest { parent: inner, child: outer })
        );
    }

    #[test]
    fn test_remove_child_requires_parent() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let stray = tree.create_element("p");
        tree.append_child(tree.root(), div).unwrap();

        assert!(matches!(tree.remove_child(div, stray), Err(DomError::NotAChild { .. })));
        assert!(matches!(tree.remove(NodeId(999)), Err(DomError::NotFound(_))));
    }

    #[test]
    fn test_attributes_case_insensitive() {
        let mut tree = DomTree::new();
        let input = tree.create_element("INPUT");
        tree.set_attribute(input, "Type", "file").unwrap();

        assert!(tree.is_element_named(input, "input"));
        assert_eq!(tree.get_attribute(input, "type"), Some("file"));
        assert!(!tree.has_attribute(input, "never-interned"));
    }

    #[test]
    fn test_set_text_content() {
        let mut tree = DomTree::new();
        let title = tree.create_element("title");
        tree.append_child(tree.root(), title).unwrap();
        tree.set_text_content(title, "old").unwrap();
        tree.set_text_content(title, "new").unwrap();

        assert_eq!(tree.text_content(title), "new");
        assert_eq!(list(&tree, title).len(), 1);
    }
}
