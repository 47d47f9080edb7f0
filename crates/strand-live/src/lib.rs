//! strand live - component boundaries over a server-patched DOM
//!
//! Stateless queries and scoped mutations that a patch-applying client runs
//! against the live document:
//!
//! - [`find_parent_cids`]: which touched components are outermost
//! - [`find_component_node_list`]: the rendered roots of one component,
//!   without leaking into nested views
//! - [`clean_child_nodes`]: drop children an append/prepend container cannot
//!   track, reporting markup errors through a [`DiagnosticSink`]
//! - [`form_controls`] / [`find_upload_inputs`]: controls that submit with a
//!   form, wherever they sit in the document
//! - [`put_title`]: commit a title with the prefix/suffix configured on
//!   `<title>`
//!
//! Nothing is cached; every call reads the tree as it is at call time.

mod bindings;
mod boundary;
mod classify;
mod forms;
mod integrity;
mod locator;
mod title;

pub use bindings::Bindings;
pub use boundary::find_parent_cids;
pub use classify::{
    Cid, CidParseError, NodeKind, UpdateMode, classify, component_id, is_session_boundary,
    is_update_mode,
};
pub use forms::{find_upload_inputs, form_controls, is_now_trigger_form_external};
pub use integrity::{CleanReport, DiagnosticSink, TracingSink, Violation, clean_child_nodes};
pub use locator::{find_child_sessions, find_component_node_list, within_same_session};
pub use title::{TitleConfig, put_title};
