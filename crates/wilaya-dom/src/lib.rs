//! Wilaya DOM - Headless Document Object Model
//!
//! Arena-based DOM tree that hosts the rankings page without a browser:
//! elements, text, class lists, inline style, event listeners, window
//! scrolling and HTML serialization.

mod classlist;
mod document;
mod dom_events;
mod error;
mod geometry;
mod node;
mod serializer;
mod style;
mod tree;

pub use classlist::DOMTokenList;
pub use document::{Document, ReadyState};
pub use dom_events::{DomEvent, DomEventType, EventDispatcher, EventListener};
pub use error::{DomError, DomResult};
pub use geometry::{DOMRect, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use serializer::HtmlSerializer;
pub use style::CSSStyleDeclaration;
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID (the document node, which also stands in for the window)
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this id refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
