//! Document view
//!
//! The page script only needs a narrow slice of the DOM. [`DocumentView`]
//! names that slice so the script runs unchanged on the headless
//! [`Document`] and on any other host that can map its nodes to `NodeId`s.

use wilaya_dom::{DomEvent, DomEventType, DomResult, Document, NodeId, ScrollIntoViewOptions};

/// Event handler registered through a [`DocumentView`]
pub type Handler<V> = Box<dyn Fn(&mut V, &mut DomEvent)>;

/// DOM capabilities used by the page script
pub trait DocumentView: Sized + 'static {
    /// Node that receives document-level events (`DOMContentLoaded`)
    fn document(&self) -> NodeId;

    /// Node that receives window-level events (`scroll`)
    fn window(&self) -> NodeId;

    fn get_element_by_id(&self, id: &str) -> Option<NodeId>;

    fn elements_by_class_name(&self, class: &str) -> Vec<NodeId>;

    fn elements_by_tag_name(&self, tag: &str) -> Vec<NodeId>;

    /// Create a detached element
    fn create_element(&mut self, tag: &str) -> NodeId;

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()>;

    fn clear_children(&mut self, node: NodeId) -> DomResult<()>;

    fn text_content(&self, node: NodeId) -> String;

    fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()>;

    fn get_attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()>;

    /// Current value of a form control
    fn input_value(&self, node: NodeId) -> Option<String>;

    fn set_style_property(&mut self, node: NodeId, property: &str, value: &str) -> DomResult<()>;

    fn add_event_listener(&mut self, target: NodeId, event_type: DomEventType, handler: Handler<Self>);

    fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoViewOptions) -> DomResult<()>;

    /// Window vertical scroll offset
    fn scroll_y(&self) -> f64;
}

impl DocumentView for Document {
    fn document(&self) -> NodeId {
        self.tree().root()
    }

    fn window(&self) -> NodeId {
        Document::window(self)
    }

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        Document::get_element_by_id(self, id)
    }

    fn elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.get_elements_by_class_name(class)
    }

    fn elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        self.get_elements_by_tag_name(tag)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        Document::create_element(self, tag)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        Document::append_child(self, parent, child).map(|_| ())
    }

    fn clear_children(&mut self, node: NodeId) -> DomResult<()> {
        Document::clear_children(self, node)
    }

    fn text_content(&self, node: NodeId) -> String {
        Document::text_content(self, node)
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()> {
        Document::set_text_content(self, node, text)
    }

    fn get_attribute(&self, node: NodeId, name: &str) -> Option<String> {
        Document::get_attribute(self, node, name).map(str::to_string)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        Document::set_attribute(self, node, name, value)
    }

    fn input_value(&self, node: NodeId) -> Option<String> {
        Document::input_value(self, node).map(str::to_string)
    }

    fn set_style_property(&mut self, node: NodeId, property: &str, value: &str) -> DomResult<()> {
        Document::set_style_property(self, node, property, value)
    }

    fn add_event_listener(&mut self, target: NodeId, event_type: DomEventType, handler: Handler<Self>) {
        Document::add_event_listener(self, target, event_type, move |doc, event| handler(doc, event));
    }

    fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoViewOptions) -> DomResult<()> {
        Document::scroll_into_view(self, node, options)
    }

    fn scroll_y(&self) -> f64 {
        Document::scroll_y(self)
    }
}
