//! Container Integrity Enforcer
//!
//! Append and prepend containers keep their children across patches and
//! match new children to old ones by `id`. A child without an id can never
//! be matched, so it is removed. Formatting whitespace and comments go
//! silently; anything else is a markup error and is reported.

use std::fmt;

use strand_dom::{DomTree, Node, NodeData, NodeId};
use strand_html::get_outer_html;

use crate::classify::{UpdateMode, is_update_mode};

/// An id-less child removed from an append/prepend container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Container the node was removed from
    pub container: NodeId,
    /// The removed node (now detached)
    pub node: NodeId,
    /// Update attribute the container declared
    pub update_attr: String,
    /// Trimmed markup of the removed node
    pub markup: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "only HTML element tags with an id are allowed inside containers with {}.\n\n\
             removing illegal node: \"{}\"",
            self.update_attr, self.markup
        )
    }
}

/// Receives integrity violations
pub trait DiagnosticSink {
    fn report(&mut self, violation: &Violation);
}

/// Logs every violation at error level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, violation: &Violation) {
        tracing::error!(container = ?violation.container, node = ?violation.node, "{violation}");
    }
}

impl<F: FnMut(&Violation)> DiagnosticSink for F {
    fn report(&mut self, violation: &Violation) {
        self(violation)
    }
}

/// What [`clean_child_nodes`] removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Every removed child, in original order
    pub removed: Vec<NodeId>,
    /// The removals that were reported
    pub violations: Vec<Violation>,
}

impl CleanReport {
    /// Nothing was removed
    pub fn is_clean(&self) -> bool {
        self.removed.is_empty()
    }
}

/// How a direct child of an accumulating container is treated
enum Verdict {
    Keep,
    Drop,
    Report,
}

fn judge(tree: &DomTree, id: NodeId, node: &Node) -> Verdict {
    if tree.get_attribute(id, "id").is_some_and(|value| !value.is_empty()) {
        return Verdict::Keep;
    }
    match &node.data {
        NodeData::Text(text) if text.content.trim().is_empty() => Verdict::Drop,
        NodeData::Comment(_) => Verdict::Drop,
        _ => Verdict::Report,
    }
}

/// Raw text for text nodes, serialized markup for everything else
fn markup(tree: &DomTree, id: NodeId, node: &Node) -> String {
    match &node.data {
        NodeData::Text(text) => text.content.trim().to_string(),
        _ => get_outer_html(tree, id).trim().to_string(),
    }
}

/// Remove children of `container` that cannot survive an append/prepend patch
///
/// No-op unless `container` declares `append` or `prepend` through
/// `update_attr`. Only direct children are examined. Each reported removal
/// goes to `sink`; nothing here fails.
pub fn clean_child_nodes<S>(
    tree: &mut DomTree,
    container: NodeId,
    update_attr: &str,
    sink: &mut S,
) -> CleanReport
where
    S: DiagnosticSink + ?Sized,
{
    let mut report = CleanReport::default();
    if !is_update_mode(tree, container, update_attr, &[UpdateMode::Append, UpdateMode::Prepend]) {
        return report;
    }

    let mut doomed = Vec::new();
    for (id, node) in tree.children(container) {
        match judge(tree, id, node) {
            Verdict::Keep => {}
            Verdict::Drop => doomed.push((id, None)),
            Verdict::Report => doomed.push((id, Some(markup(tree, id, node)))),
        }
    }

    for (id, markup) in doomed {
        if let Err(err) = tree.remove_child(container, id) {
            tracing::debug!(%err, "child vanished before cleanup");
            continue;
        }
        report.removed.push(id);

        if let Some(markup) = markup {
            let violation = Violation {
                container,
                node: id,
                update_attr: update_attr.to_string(),
                markup,
            };
            sink.report(&violation);
            report.violations.push(violation);
        }
    }

    tracing::debug!(
        ?container,
        removed = report.removed.len(),
        reported = report.violations.len(),
        "container cleaned"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(tree: &mut DomTree, mode: Option<&str>) -> NodeId {
        let div = tree.create_element("div");
        if let Some(mode) = mode {
            tree.set_attribute(div, "phx-update", mode).unwrap();
        }
        tree.append_child(tree.root(), div).unwrap();
        div
    }

    #[test]
    fn test_comment_removed_silently() {
        let mut tree = DomTree::new();
        let div = container(&mut tree, Some("prepend"));
        let comment = tree.create_comment("note");
        tree.append_child(div, comment).unwrap();

        let mut seen = Vec::new();
        let mut sink = |v: &Violation| seen.push(v.node);
        let report = clean_child_nodes(&mut tree, div, "phx-update", &mut sink);

        assert_eq!(report.removed, vec![comment]);
        assert!(seen.is_empty());
    }

    #[test]
    fn test_empty_id_is_reported() {
        let mut tree = DomTree::new();
        let div = container(&mut tree, Some("append"));
        let child = tree.create_element("p");
        tree.set_attribute(child, "id", "").unwrap();
        tree.append_child(div, child).unwrap();

        let mut count = 0;
        let mut sink = |_: &Violation| count += 1;
        let report = clean_child_nodes(&mut tree, div, "phx-update", &mut sink);

        assert_eq!(count, 1);
        assert_eq!(report.violations[0].markup, "<p id=\"\"></p>");
    }

    #[test]
    fn test_other_modes_untouched() {
        for mode in [None, Some("replace"), Some("ignore"), Some("stream")] {
            let mut tree = DomTree::new();
            let div = container(&mut tree, mode);
            let text = tree.create_text("  ");
            tree.append_child(div, text).unwrap();

            let report = clean_child_nodes(&mut tree, div, "phx-update", &mut TracingSink);
            assert!(report.is_clean());
            assert_eq!(tree.children(div).count(), 1);
        }
    }

    #[test]
    fn test_text_reported_unescaped() {
        let mut tree = DomTree::new();
        let div = container(&mut tree, Some("append"));
        let text = tree.create_text("  a < b & c ");
        tree.append_child(div, text).unwrap();

        let report = clean_child_nodes(&mut tree, div, "phx-update", &mut TracingSink);

        assert_eq!(report.removed, vec![text]);
        assert_eq!(report.violations[0].markup, "a < b & c");
    }

    #[test]
    fn test_violation_message() {
        let violation = Violation {
            container: NodeId(1),
            node: NodeId(2),
            update_attr: "phx-update".to_string(),
            markup: "<div>no id</div>".to_string(),
        };
        let message = violation.to_string();
        assert!(message.starts_with(
            "only HTML element tags with an id are allowed inside containers with phx-update."
        ));
        assert!(message.ends_with("removing illegal node: \"<div>no id</div>\""));
    }
}
