//! tinsel DOM
//!
//! A small arena of element nodes that stands in for the browser document.
//! Renderers build into it through [`NodeId`] handles, and any subtree can
//! be serialized to HTML for a page, a file, or `innerHTML`.
//!
//! ```text
//! Dom::create_element → append_child / set_* → Dom::to_html
//! ```

pub mod html;
pub mod node;

pub use node::{Dom, NodeId};

/// Element tree error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
    #[error("Cannot append {child} into its own subtree at {parent}")]
    CycleDetected { parent: NodeId, child: NodeId },
}
