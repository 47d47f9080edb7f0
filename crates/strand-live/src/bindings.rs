//! Reserved attribute names
//!
//! These names are a contract with the server-side renderer. The defaults
//! match what it emits; hosts that rename the binding prefix override them.

use serde::Deserialize;

/// Attribute names the queries dispatch on
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Bindings {
    /// Component root marker, value is the cid
    pub component: String,
    /// Session boundary marker (nested live view root)
    pub session: String,
    /// Id of the view that owns a nested boundary
    pub parent_id: String,
    /// Container update mode
    pub update: String,
    /// Upload channel reference on file inputs
    pub upload_ref: String,
    /// Out-of-tree form owner attribute
    pub form: String,
    /// Title options on the `<title>` element
    pub title_prefix: String,
    pub title_suffix: String,
    pub title_default: String,
}

impl Bindings {
    /// Derive the binding names from a custom prefix such as `"phx-"`
    ///
    /// Data attributes become `data-<prefix>...`, the update attribute
    /// becomes `<prefix>update`. `form` and the title options are HTML/host
    /// names and do not change.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            component: format!("data-{prefix}component"),
            session: format!("data-{prefix}session"),
            parent_id: format!("data-{prefix}parent-id"),
            update: format!("{prefix}update"),
            upload_ref: format!("data-{prefix}upload-ref"),
            ..Self::default()
        }
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            component: "data-phx-component".to_string(),
            session: "data-phx-session".to_string(),
            parent_id: "data-phx-parent-id".to_string(),
            update: "phx-update".to_string(),
            upload_ref: "data-phx-upload-ref".to_string(),
            form: "form".to_string(),
            title_prefix: "data-prefix".to_string(),
            title_suffix: "data-suffix".to_string(),
            title_default: "data-default".to_string(),
        }
    }
}
