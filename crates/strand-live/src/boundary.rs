//! Boundary Resolver
//!
//! Given the cids touched by a patch, find the ones that are not rendered
//! inside another touched component. Patching those roots covers the rest.

use std::collections::{HashMap, HashSet};

use strand_dom::{DomTree, NodeId};

use crate::classify::component_id;
use crate::locator::within_same_session;
use crate::{Bindings, Cid};

/// Candidates that are roots relative to `root`
///
/// A candidate is dropped only when it occurs under `root` and every one of
/// its occurrences has a different candidate among its ancestors (up to, not
/// including, `root`). A component nested in itself stays. Occurrences inside
/// nested views are ignored, so a candidate seen only there, or nowhere, is
/// kept.
pub fn find_parent_cids<I>(
    tree: &DomTree,
    root: NodeId,
    candidates: I,
    bindings: &Bindings,
) -> HashSet<Cid>
where
    I: IntoIterator<Item = Cid>,
{
    let candidates: HashSet<Cid> = candidates.into_iter().collect();

    // cid -> whether any occurrence is free of other candidates
    let mut occurrences: HashMap<Cid, bool> = HashMap::new();

    for (node, _) in tree.descendants(root) {
        let Some(cid) = component_id(tree, node, bindings) else {
            continue;
        };
        if !candidates.contains(&cid) || !within_same_session(tree, node, root, bindings) {
            continue;
        }

        let nested = tree
            .ancestors(node)
            .take_while(|&ancestor| ancestor != root)
            .filter_map(|ancestor| component_id(tree, ancestor, bindings))
            .any(|outer| outer != cid && candidates.contains(&outer));

        tracing::trace!(%cid, ?node, nested, "candidate occurrence");
        *occurrences.entry(cid).or_insert(false) |= !nested;
    }

    let parents: HashSet<Cid> = candidates
        .into_iter()
        .filter(|cid| occurrences.get(cid).copied().unwrap_or(true))
        .collect();

    tracing::debug!(?root, ?parents, "parent cids resolved");
    parents
}
