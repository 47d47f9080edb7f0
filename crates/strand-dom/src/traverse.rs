//! Tree traversal iterators
//!
//! All three walk the sibling/parent links directly; none allocate.

use crate::{DomTree, Node, NodeId};

/// Direct children of a node, first to last
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a DomTree, parent: NodeId) -> Self {
        let next = tree.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Self { tree, next }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order walk of a subtree, excluding its root
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(tree: &'a DomTree, root: NodeId) -> Self {
        let next = tree.get(root).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Self { tree, root, next }
    }

    fn advance(&self, from: NodeId) -> NodeId {
        let Some(node) = self.tree.get(from) else {
            return NodeId::NONE;
        };
        if node.first_child.is_valid() {
            return node.first_child;
        }

        let mut current = from;
        while current != self.root {
            let Some(node) = self.tree.get(current) else {
                break;
            };
            if node.next_sibling.is_valid() {
                return node.next_sibling;
            }
            current = node.parent;
            if !current.is_valid() {
                break;
            }
        }
        NodeId::NONE
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        let node = self.tree.get(id)?;
        self.next = self.advance(id);
        Some((id, node))
    }
}

/// Ancestors of a node, nearest first, ending at the document node
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(tree: &'a DomTree, node: NodeId) -> Self {
        let next = tree.get(node).map(|n| n.parent).unwrap_or(NodeId::NONE);
        Self { tree, next }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next.to_option()?;
        self.next = self.tree.get(id).map(|n| n.parent).unwrap_or(NodeId::NONE);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DomTree, NodeId};

    // root > div(a) > [span(b) > em(c)], p(d)
    fn sample() -> (DomTree, [NodeId; 4]) {
        let mut tree = DomTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("span");
        let c = tree.create_element("em");
        let d = tree.create_element("p");
        tree.append_child(tree.root(), a).unwrap();
        tree.append_child(a, b).unwrap();
        tree.append_child(b, c).unwrap();
        tree.append_child(a, d).unwrap();
        (tree, [a, b, c, d])
    }

    #[test]
    fn test_descendants_document_order() {
        let (tree, [a, b, c, d]) = sample();
        let order: Vec<_> = tree.descendants(tree.root()).map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, b, c, d]);
    }

    #[test]
    fn test_descendants_stay_in_subtree() {
        let (tree, [_, b, c, _]) = sample();
        let order: Vec<_> = tree.descendants(b).map(|(id, _)| id).collect();
        assert_eq!(order, vec![c]);
    }

    #[test]
    fn test_ancestors() {
        let (tree, [a, b, c, _]) = sample();
        let chain: Vec<_> = tree.ancestors(c).collect();
        assert_eq!(chain, vec![b, a, tree.root()]);
        assert!(tree.contains(a, c));
        assert!(!tree.contains(c, a));
    }
}
