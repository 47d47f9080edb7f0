//! Title Formatter
//!
//! The `<title>` element doubles as configuration: `data-prefix`,
//! `data-suffix` and `data-default` on it shape every title the server pushes.

use strand_dom::{Document, DomTree, NodeId};

use crate::Bindings;

/// Formatting options read from the `<title>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleConfig {
    pub prefix: String,
    pub suffix: String,
    /// Used in place of an empty title
    pub default: Option<String>,
}

impl TitleConfig {
    /// Read options from `element`; missing ones are empty
    pub fn from_element(tree: &DomTree, element: NodeId, bindings: &Bindings) -> Self {
        let read = |name: &str| tree.get_attribute(element, name).map(str::to_string);
        Self {
            prefix: read(&bindings.title_prefix).unwrap_or_default(),
            suffix: read(&bindings.title_suffix).unwrap_or_default(),
            default: read(&bindings.title_default),
        }
    }

    /// `prefix + title + suffix`, or `None` when the title is blank and
    /// there is no default to fall back on
    pub fn format(&self, title: &str) -> Option<String> {
        let inner = if title.trim().is_empty() {
            self.default.as_deref()?
        } else {
            title
        };
        Some(format!("{}{}{}", self.prefix, inner, self.suffix))
    }
}

/// Commit `title` as the document title
///
/// With a `<title>` element present its options apply. Without one the title
/// is written verbatim into a new `<title>`. Returns the committed title, or
/// `None` when the document was left untouched.
pub fn put_title(doc: &mut Document, title: &str, bindings: &Bindings) -> Option<String> {
    let formatted = match doc.title_element() {
        Some(element) => TitleConfig::from_element(doc.tree(), element, bindings).format(title)?,
        None => title.to_string(),
    };

    if let Err(err) = doc.set_title(&formatted) {
        tracing::debug!(%err, "title not committed");
        return None;
    }
    tracing::trace!(title = %formatted, "title committed");
    Some(formatted)
}
