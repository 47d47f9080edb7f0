//! strand HTML Parser
//!
//! HTML5 parsing built on html5ever, converted into the strand arena tree,
//! plus innerHTML/outerHTML serialization.

mod parser;
mod serializer;

pub use parser::HtmlParser;
pub use serializer::{HtmlSerializer, get_inner_html, get_outer_html};
pub use strand_dom::{Document, DomTree, Node, NodeId};

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Parse `html` as body content and append the nodes under `parent`
pub fn parse_fragment(
    tree: &mut DomTree,
    parent: NodeId,
    html: &str,
) -> Result<Vec<NodeId>, ParseError> {
    HtmlParser::new().parse_fragment(tree, parent, html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("fragment parent {0:?} is not in the tree")]
    ParentNotFound(NodeId),

    #[error(transparent)]
    Dom(#[from] strand_dom::DomError),
}
