//! DOM Node Operations - error types
//!
//! Structural mutations (append, insert, remove) report misuse through
//! [`DomError`] instead of panicking.

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node id is not in the arena
    #[error("node {0:?} not found")]
    NotFound(NodeId),

    /// Inserting would create a cycle (node into its own subtree)
    #[error("hierarchy request error: {child:?} cannot be inserted under {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// Reference node is not a child of the given parent
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },
}
