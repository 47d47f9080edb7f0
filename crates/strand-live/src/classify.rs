//! Node classification
//!
//! A node's role is decided only by its attributes. The queries dispatch on
//! [`NodeKind`] instead of on tag names.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use strand_dom::{DomTree, NodeId};

use crate::Bindings;

/// Component identifier, scoped to the enclosing session boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cid(pub u32);

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Cid {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Error parsing a component attribute value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidParseError {
    /// Signs, leading zeros, whitespace or non-digits
    #[error("invalid component id {0:?}: not a canonical decimal")]
    NotCanonical(String),
    /// Canonical digits that overflow `u32`
    #[error("invalid component id {value:?}: {source}")]
    OutOfRange {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Only the form `Cid`'s `Display` produces: "0" or digits without a leading zero
fn is_canonical(s: &str) -> bool {
    match s.as_bytes() {
        [] => false,
        [b'0', _, ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

impl FromStr for Cid {
    type Err = CidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_canonical(s) {
            return Err(CidParseError::NotCanonical(s.to_string()));
        }
        s.parse::<u32>().map(Cid).map_err(|source| CidParseError::OutOfRange {
            value: s.to_string(),
            source,
        })
    }
}

/// Declared container update mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Children are replaced on every patch
    #[default]
    Replace,
    /// New children are appended to the existing ones
    Append,
    /// New children are prepended to the existing ones
    Prepend,
    /// Content is owned by the client and never patched
    Ignore,
    /// Children are managed as a keyed stream
    Stream,
}

impl UpdateMode {
    /// Parse an attribute value; anything unrecognized is `Replace`
    pub fn parse(s: &str) -> Self {
        match s {
            "append" => Self::Append,
            "prepend" => Self::Prepend,
            "ignore" => Self::Ignore,
            "stream" => Self::Stream,
            _ => Self::Replace,
        }
    }

    /// Mode declared on `node` through `attr`
    pub fn of(tree: &DomTree, node: NodeId, attr: &str) -> Self {
        tree.get_attribute(node, attr).map(Self::parse).unwrap_or_default()
    }

    /// Append or prepend: existing children survive across patches
    pub fn is_accumulating(self) -> bool {
        matches!(self, Self::Append | Self::Prepend)
    }
}

/// Whether `node` declares one of `modes` through `attr`
///
/// Only explicitly declared modes match; a missing attribute never does.
pub fn is_update_mode(
    tree: &DomTree,
    node: NodeId,
    attr: &str,
    modes: &[UpdateMode],
) -> bool {
    tree.get_attribute(node, attr)
        .is_some_and(|value| modes.contains(&UpdateMode::parse(value)))
}

/// Role of a node in the live document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of component `cid`
    Component(Cid),
    /// Root of an independently rendered view
    SessionBoundary,
    /// Container with a declared update mode
    Container(UpdateMode),
    /// Anything else, including non-elements
    Plain,
}

/// Classify a node by its attributes
///
/// A session boundary wins over a component marker, which wins over a
/// container declaration.
pub fn classify(tree: &DomTree, node: NodeId, bindings: &Bindings) -> NodeKind {
    if is_session_boundary(tree, node, bindings) {
        return NodeKind::SessionBoundary;
    }
    if let Some(cid) = component_id(tree, node, bindings) {
        return NodeKind::Component(cid);
    }
    match tree.get_attribute(node, &bindings.update) {
        Some(value) => NodeKind::Container(UpdateMode::parse(value)),
        None => NodeKind::Plain,
    }
}

/// Cid declared on `node`, if the attribute holds a canonical decimal
///
/// "03" and "+3" are not cid 3; they name no component at all.
pub fn component_id(tree: &DomTree, node: NodeId, bindings: &Bindings) -> Option<Cid> {
    let value = tree.get_attribute(node, &bindings.component)?;
    match value.parse() {
        Ok(cid) => Some(cid),
        Err(err) => {
            tracing::trace!(?node, %err, "ignoring component marker");
            None
        }
    }
}

/// Whether `node` is the root of a nested session
pub fn is_session_boundary(tree: &DomTree, node: NodeId, bindings: &Bindings) -> bool {
    tree.has_attribute(node, &bindings.session)
}
