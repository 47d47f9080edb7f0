//! Component Locator
//!
//! Finds the rendered roots of a component without leaking into nested
//! views. A nested view is rendered (and numbers its components) on its own,
//! so a cid found below another session boundary is a different component.

use strand_dom::{DomTree, NodeId};

use crate::classify::{component_id, is_session_boundary};
use crate::{Bindings, Cid};

/// All roots of component `cid` under `root`, in document order
///
/// `root` itself is never part of the result. A match is dropped when a
/// session boundary sits between it and `root`; the match being a session
/// root itself does not count.
pub fn find_component_node_list(
    tree: &DomTree,
    root: NodeId,
    cid: Cid,
    bindings: &Bindings,
) -> Vec<NodeId> {
    let nodes: Vec<NodeId> = tree
        .descendants(root)
        .map(|(id, _)| id)
        .filter(|&id| component_id(tree, id, bindings) == Some(cid))
        .filter(|&id| within_same_session(tree, id, root, bindings))
        .collect();

    tracing::trace!(%cid, ?root, count = nodes.len(), "component nodes located");
    nodes
}

/// Whether `node` reaches `root` without crossing a session boundary
///
/// `false` when `node` is not inside `root`.
pub fn within_same_session(
    tree: &DomTree,
    node: NodeId,
    root: NodeId,
    bindings: &Bindings,
) -> bool {
    for ancestor in tree.ancestors(node) {
        if ancestor == root {
            return true;
        }
        if is_session_boundary(tree, ancestor, bindings) {
            return false;
        }
    }
    false
}

/// Nested views under `root` whose parent-id attribute is `parent_id`
pub fn find_child_sessions(
    tree: &DomTree,
    root: NodeId,
    parent_id: &str,
    bindings: &Bindings,
) -> Vec<NodeId> {
    tree.descendants(root)
        .map(|(id, _)| id)
        .filter(|&id| is_session_boundary(tree, id, bindings))
        .filter(|&id| tree.get_attribute(id, &bindings.parent_id) == Some(parent_id))
        .collect()
}
