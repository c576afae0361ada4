//! DOM Events
//!
//! The handful of events the rankings page listens for, plus the
//! listener type stored by [`Document`].

use crate::{Document, NodeId};
use std::rc::Rc;

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEventType {
    /// Document finished parsing
    DOMContentLoaded,
    /// Value of a form control changed
    Input,
    /// Element activated
    Click,
    /// Window scroll offset changed
    Scroll,
}

impl DomEventType {
    /// Event name as used by `addEventListener`
    pub fn name(self) -> &'static str {
        match self {
            Self::DOMContentLoaded => "DOMContentLoaded",
            Self::Input => "input",
            Self::Click => "click",
            Self::Scroll => "scroll",
        }
    }

    fn bubbles(self) -> bool {
        matches!(self, Self::Input | Self::Click | Self::DOMContentLoaded)
    }

    fn cancelable(self) -> bool {
        matches!(self, Self::Click)
    }
}

/// Event listener: receives the document and the in-flight event
pub type EventListener = Rc<dyn Fn(&mut Document, &mut DomEvent)>;

/// DOM event
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: DomEventType,
    pub target: NodeId,
    pub current_target: Option<NodeId>,
    pub bubbles: bool,
    pub cancelable: bool,
    pub timestamp: f64,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    /// Create an event with the default flags for its type
    pub fn new(event_type: DomEventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            current_target: None,
            bubbles: event_type.bubbles(),
            cancelable: event_type.cancelable(),
            timestamp: 0.0,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create DOMContentLoaded event
    pub fn content_loaded() -> Self {
        Self::new(DomEventType::DOMContentLoaded, NodeId::ROOT)
    }

    /// Create input event
    pub fn input(target: NodeId) -> Self {
        Self::new(DomEventType::Input, target)
    }

    /// Create click event
    pub fn click(target: NodeId) -> Self {
        Self::new(DomEventType::Click, target)
    }

    /// Create window scroll event
    pub fn scroll() -> Self {
        Self::new(DomEventType::Scroll, NodeId::ROOT)
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Check if propagation was stopped
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Event dispatcher trait
pub trait EventDispatcher {
    /// Dispatch an event; returns false if the default action was prevented
    fn dispatch_event(&mut self, event: DomEvent) -> bool;
}
