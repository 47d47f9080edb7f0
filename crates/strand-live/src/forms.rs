//! Form Surface Resolver
//!
//! Which controls submit with a form, following the native form-owner rules:
//! a `form` attribute names the owner by id and overrides DOM nesting;
//! without it the nearest ancestor `<form>` owns the control.

use strand_dom::{DomTree, NodeId};

use crate::Bindings;

/// Tags of listed form-associated elements
const LISTED_TAGS: &[&str] = &[
    "button", "fieldset", "input", "object", "output", "select", "textarea",
];

/// Whether `node` is a control that `form.elements` would list
fn is_listed_control(tree: &DomTree, node: NodeId) -> bool {
    let Some(tag) = tree.tag_name(node) else {
        return false;
    };
    if !LISTED_TAGS.contains(&tag) {
        return false;
    }
    // Image buttons submit coordinates but are not listed
    !(tag == "input" && input_type_is(tree, node, "image"))
}

fn input_type_is(tree: &DomTree, node: NodeId, kind: &str) -> bool {
    tree.get_attribute(node, "type")
        .is_some_and(|value| value.trim().eq_ignore_ascii_case(kind))
}

/// Topmost ancestor of `node` (the document node when attached)
fn home_root(tree: &DomTree, node: NodeId) -> NodeId {
    tree.ancestors(node).last().unwrap_or(node)
}

/// Resolves ownership of controls for one form
struct FormOwner<'a> {
    tree: &'a DomTree,
    form: NodeId,
    /// The form's id, if it is the element that id resolves to
    id: Option<&'a str>,
    form_attr: &'a str,
}

impl<'a> FormOwner<'a> {
    fn new(tree: &'a DomTree, form: NodeId, home: NodeId, bindings: &'a Bindings) -> Self {
        let id = tree
            .get_attribute(form, "id")
            .filter(|id| !id.is_empty())
            .filter(|id| first_with_id(tree, home, id) == Some(form));
        Self {
            tree,
            form,
            id,
            form_attr: &bindings.form,
        }
    }

    fn owns(&self, control: NodeId) -> bool {
        match self.tree.get_attribute(control, self.form_attr) {
            Some(owner) => self.id == Some(owner),
            None => self.nearest_form(control) == Some(self.form),
        }
    }

    fn nearest_form(&self, control: NodeId) -> Option<NodeId> {
        self.tree
            .ancestors(control)
            .find(|&ancestor| self.tree.is_element_named(ancestor, "form"))
    }
}

fn first_with_id(tree: &DomTree, home: NodeId, id: &str) -> Option<NodeId> {
    std::iter::once(home)
        .chain(tree.descendants(home).map(|(node, _)| node))
        .find(|&node| tree.get_attribute(node, "id") == Some(id))
}

/// Controls associated with `form`, in document order
///
/// Empty when `form` is not a `<form>` element. Covers descendants of the
/// form and controls anywhere in the same tree that name the form's id in
/// their `form` attribute; a descendant naming another form is excluded.
pub fn form_controls(tree: &DomTree, form: NodeId, bindings: &Bindings) -> Vec<NodeId> {
    if !tree.is_element_named(form, "form") {
        return Vec::new();
    }

    let home = home_root(tree, form);
    let owner = FormOwner::new(tree, form, home, bindings);

    let controls: Vec<NodeId> = tree
        .descendants(home)
        .map(|(node, _)| node)
        .filter(|&node| is_listed_control(tree, node))
        .filter(|&node| owner.owns(node))
        .collect();

    tracing::trace!(?form, count = controls.len(), "form controls resolved");
    controls
}

/// File inputs of `form` that feed an upload channel, in document order
pub fn find_upload_inputs(tree: &DomTree, form: NodeId, bindings: &Bindings) -> Vec<NodeId> {
    form_controls(tree, form, bindings)
        .into_iter()
        .filter(|&node| tree.is_element_named(node, "input"))
        .filter(|&node| input_type_is(tree, node, "file"))
        .filter(|&node| tree.has_attribute(node, &bindings.upload_ref))
        .collect()
}

/// Whether `form` carries `attr`, whatever its value
pub fn is_now_trigger_form_external(tree: &DomTree, form: NodeId, attr: &str) -> bool {
    tree.has_attribute(form, attr)
}
