//! Document access for the search integration
//!
//! The page tree is owned by the host. Everything here goes through the
//! [`DomTree`] capability so the form extraction logic runs the same against
//! a live page binding or the headless [`HtmlDocument`].

mod document;
pub mod form;

pub use document::HtmlDocument;
pub use form::{closest_ancestor, get_container_and_button, FormContainerPair};

use crate::utils::DomError;
use std::fmt::Debug;

/// Tree operations the search integration needs from a document
pub trait DomTree {
    /// Handle to a node of the tree. Handles stay valid after a node is detached.
    type Node: Copy + Eq + Debug;

    /// All attached elements matching `selector`, in document order
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Node>, DomError>;

    /// First descendant of `scope` matching `selector`.
    ///
    /// Works on detached subtrees too.
    fn query_selector_within(
        &self,
        scope: Self::Node,
        selector: &str,
    ) -> Result<Option<Self::Node>, DomError>;

    /// Parent element, `None` at the top of the element chain
    fn parent_element(&self, node: Self::Node) -> Option<Self::Node>;

    /// Lowercase tag name, `None` for non-element nodes
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    /// Create a new, unattached element
    fn create_element(
        &mut self,
        tag_name: &str,
        attributes: &[(&str, &str)],
    ) -> Result<Self::Node, DomError>;

    /// Put `replacement` where `old` is and detach `old` from the document
    fn replace_node(&mut self, old: Self::Node, replacement: Self::Node) -> Result<(), DomError>;

    /// Whether `node` is reachable from the document root
    fn is_attached(&self, node: Self::Node) -> bool;
}
