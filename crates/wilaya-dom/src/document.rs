//! Document - High-level document API
//!
//! Wraps the [`DomTree`] with the window-level state a page script can
//! observe: event listeners, scroll offset, viewport and location hash.

use crate::{
    DOMRect, DomError, DomEvent, DomEventType, DomResult, DomTree, ElementData, EventDispatcher,
    EventListener, HtmlSerializer, Node, NodeId, ScrollBehavior, ScrollIntoViewOptions,
};
use std::rc::Rc;

/// `document.readyState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    #[default]
    Loading,
    Interactive,
    Complete,
}

struct Registration {
    target: NodeId,
    event_type: DomEventType,
    listener: EventListener,
}

/// HTML Document
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    head_element: NodeId,
    body_element: NodeId,
    listeners: Vec<Registration>,
    ready_state: ReadyState,
    /// Window vertical scroll offset (`pageYOffset`)
    scroll_y: f64,
    viewport: DOMRect,
    location_hash: String,
    last_scroll_behavior: Option<ScrollBehavior>,
}

impl Document {
    /// Create a new document with `<html>`, `<head>` and `<body>`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes under a fresh root cannot violate hierarchy rules
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            head_element: head,
            body_element: body,
            listeners: Vec::new(),
            ready_state: ReadyState::Loading,
            scroll_y: 0.0,
            viewport: DOMRect::from_xywh(0.0, 0.0, 1024.0, 768.0),
            location_hash: String::new(),
            last_scroll_behavior: None,
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get `<head>` element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get `<body>` element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Event target standing in for `window`
    pub fn window(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Create a detached text node
    pub fn create_text_node(&mut self, content: &str) -> NodeId {
        self.tree.create_text(content)
    }

    /// Append a child node
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.tree.append_child(parent, child)
    }

    /// Create an element with attributes and append it to `parent`
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> DomResult<NodeId> {
        let id = self.create_element(tag);
        for (name, value) in attrs {
            self.set_attribute(id, name, value)?;
        }
        self.append_child(parent, id)
    }

    /// Remove all children of `node`. The removed nodes are freed along
    /// with any listeners registered on them.
    pub fn clear_children(&mut self, node: NodeId) -> DomResult<()> {
        if self.tree.get(node).is_none() {
            return Err(DomError::NotFound(node));
        }
        if self.tree.remove_children(node) > 0 {
            let tree = &self.tree;
            self.listeners.retain(|r| tree.get(r.target).is_some());
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Element data of `node`
    pub fn element(&self, node: NodeId) -> DomResult<&ElementData> {
        self.tree
            .get(node)
            .ok_or(DomError::NotFound(node))?
            .as_element()
            .ok_or(DomError::NotAnElement(node))
    }

    /// Mutable element data of `node`
    pub fn element_mut(&mut self, node: NodeId) -> DomResult<&mut ElementData> {
        self.tree
            .get_mut(node)
            .ok_or(DomError::NotFound(node))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(node))
    }

    fn connected_elements(&self) -> impl Iterator<Item = (NodeId, &ElementData)> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .filter_map(|id| self.tree.get(id).and_then(Node::as_element).map(|e| (id, e)))
    }

    /// Get element by ID (first match in document order)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.connected_elements()
            .find(|(_, elem)| elem.id.as_deref() == Some(id))
            .map(|(node, _)| node)
    }

    /// Elements carrying `class`, in document order
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.connected_elements()
            .filter(|(_, elem)| elem.has_class(class))
            .map(|(node, _)| node)
            .collect()
    }

    /// Elements with tag name `tag`, in document order
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        self.connected_elements()
            .filter(|(_, elem)| elem.tag == tag)
            .map(|(node, _)| node)
            .collect()
    }

    /// Get an attribute of an element
    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).ok()?.get_attr(name)
    }

    /// Set an attribute of an element
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(node)?.set_attr(name, value);
        Ok(())
    }

    /// Set one inline style property
    pub fn set_style_property(&mut self, node: NodeId, property: &str, value: &str) -> DomResult<()> {
        self.element_mut(node)?.set_style_property(property, value);
        Ok(())
    }

    /// Inline style property of an element
    pub fn style_property(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).ok()?.style.get_property_value(property)
    }

    /// `textContent` getter
    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    /// `textContent` setter: replaces all children with one text node
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()> {
        self.clear_children(node)?;
        if !text.is_empty() {
            let text_node = self.tree.create_text(text);
            self.tree.append_child(node, text_node)?;
        }
        Ok(())
    }

    /// Current value of a form control
    pub fn input_value(&self, node: NodeId) -> Option<&str> {
        self.element(node).ok()?.value.as_deref()
    }

    /// Set the value of a form control without firing events
    pub fn set_input_value(&mut self, node: NodeId, value: &str) -> DomResult<()> {
        self.element_mut(node)?.value = Some(value.to_string());
        Ok(())
    }

    /// Simulate typing: set the value, then fire `input`
    pub fn input(&mut self, node: NodeId, value: &str) -> DomResult<()> {
        self.set_input_value(node, value)?;
        self.dispatch_event(DomEvent::input(node));
        Ok(())
    }

    /// Assign the layout box of an element
    pub fn set_rect(&mut self, node: NodeId, rect: DOMRect) -> DomResult<()> {
        self.element_mut(node)?.rect = rect;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Register a listener on `target`
    pub fn add_event_listener<F>(&mut self, target: NodeId, event_type: DomEventType, listener: F)
    where
        F: Fn(&mut Document, &mut DomEvent) + 'static,
    {
        self.listeners.push(Registration {
            target,
            event_type,
            listener: Rc::new(listener),
        });
    }

    /// Fire DOMContentLoaded and mark the document complete. Only the
    /// first call has any effect.
    pub fn finish_loading(&mut self) {
        if self.ready_state != ReadyState::Loading {
            return;
        }
        self.ready_state = ReadyState::Interactive;
        self.dispatch_event(DomEvent::content_loaded());
        self.ready_state = ReadyState::Complete;
    }

    /// Simulate activating `node`; runs the default action unless prevented
    pub fn click(&mut self, node: NodeId) -> bool {
        let proceed = self.dispatch_event(DomEvent::click(node));
        if proceed {
            self.activate_default(node);
        }
        proceed
    }

    fn activate_default(&mut self, node: NodeId) {
        let Ok(elem) = self.element(node) else {
            return;
        };
        if elem.tag != "a" {
            return;
        }
        let Some(fragment) = elem.get_attr("href").and_then(|h| h.strip_prefix('#')) else {
            return;
        };
        let fragment = fragment.to_string();
        self.location_hash = format!("#{fragment}");
        if let Some(target) = self.get_element_by_id(&fragment) {
            if let Err(err) = self.scroll_into_view(target, ScrollIntoViewOptions::default()) {
                tracing::debug!(%err, fragment = %fragment, "fragment navigation failed");
            }
        }
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    /// `window.pageYOffset`
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Scroll the window; fires `scroll` when the offset changes
    pub fn scroll_to(&mut self, y: f64) {
        let y = y.max(0.0);
        if y == self.scroll_y {
            return;
        }
        self.scroll_y = y;
        self.dispatch_event(DomEvent::scroll());
    }

    /// `element.scrollIntoView(options)`
    pub fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoViewOptions) -> DomResult<()> {
        let rect = self.element(node)?.rect;
        let y = options.resolve(&rect, self.viewport.height, self.scroll_y);
        self.last_scroll_behavior = Some(options.behavior);
        self.scroll_to(y);
        Ok(())
    }

    /// Behavior requested by the most recent `scroll_into_view`
    pub fn last_scroll_behavior(&self) -> Option<ScrollBehavior> {
        self.last_scroll_behavior
    }

    /// `location.hash`
    pub fn location_hash(&self) -> &str {
        &self.location_hash
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// `innerHTML` getter
    pub fn inner_html(&self, node: NodeId) -> String {
        HtmlSerializer::new().serialize_inner(&self.tree, node)
    }

    /// `outerHTML` getter
    pub fn outer_html(&self, node: NodeId) -> String {
        HtmlSerializer::new().serialize_outer(&self.tree, node)
    }

    /// Whole document as HTML
    pub fn to_html(&self, pretty: bool) -> String {
        let serializer = if pretty { HtmlSerializer::pretty() } else { HtmlSerializer::new() };
        serializer.serialize_document(&self.tree)
    }
}

impl EventDispatcher for Document {
    fn dispatch_event(&mut self, mut event: DomEvent) -> bool {
        let mut path = vec![event.target];
        if event.bubbles {
            let mut current = self.tree.get(event.target).map_or(NodeId::NONE, |n| n.parent);
            while current.is_valid() {
                path.push(current);
                current = self.tree.get(current).map_or(NodeId::NONE, |n| n.parent);
            }
        }

        tracing::trace!(event = event.event_type.name(), node = %event.target, "dispatch");

        for node in path {
            let listeners: Vec<EventListener> = self
                .listeners
                .iter()
                .filter(|r| r.target == node && r.event_type == event.event_type)
                .map(|r| Rc::clone(&r.listener))
                .collect();
            event.current_target = Some(node);
            for listener in listeners {
                listener(self, &mut event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }

        !event.is_default_prevented()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_document_structure() {
        let doc = Document::new("file:///index.html");
        assert_eq!(doc.url(), "file:///index.html");
        assert_eq!(doc.get_elements_by_tag_name("body"), vec![doc.body()]);
        assert_eq!(doc.ready_state(), ReadyState::Loading);
    }

    #[test]
    fn test_get_element_by_id_ignores_detached() {
        let mut doc = Document::default();
        let body = doc.body();
        let div = doc.append_element(body, "div", &[("id", "wilayasGrid")]).unwrap();
        assert_eq!(doc.get_element_by_id("wilayasGrid"), Some(div));

        doc.clear_children(body).unwrap();
        assert_eq!(doc.get_element_by_id("wilayasGrid"), None);
    }

    #[test]
    fn test_set_text_content() {
        let mut doc = Document::default();
        let body = doc.body();
        let span = doc.append_element(body, "span", &[]).unwrap();

        doc.set_text_content(span, "1,500").unwrap();
        doc.set_text_content(span, "3,000").unwrap();
        assert_eq!(doc.text_content(span), "3,000");
        assert_eq!(doc.tree().children(span).count(), 1);
    }

    #[test]
    fn test_click_bubbles_to_ancestors() {
        let mut doc = Document::default();
        let body = doc.body();
        let link = doc.append_element(body, "a", &[("href", "#top")]).unwrap();

        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        doc.add_event_listener(body, DomEventType::Click, move |_, _| seen.set(seen.get() + 1));

        doc.click(link);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_prevent_default_blocks_navigation() {
        let mut doc = Document::default();
        let body = doc.body();
        let link = doc.append_element(body, "a", &[("href", "#about")]).unwrap();
        assert!(doc.click(link));
        assert_eq!(doc.location_hash(), "#about");

        let mut doc = Document::default();
        let body = doc.body();
        let link = doc.append_element(body, "a", &[("href", "#about")]).unwrap();
        doc.add_event_listener(link, DomEventType::Click, |_, event| event.prevent_default());
        assert!(!doc.click(link));
        assert_eq!(doc.location_hash(), "");
    }

    #[test]
    fn test_scroll_fires_only_on_change() {
        let mut doc = Document::default();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let window = doc.window();
        doc.add_event_listener(window, DomEventType::Scroll, move |doc, _| {
            assert!(doc.scroll_y() > 0.0);
            seen.set(seen.get() + 1);
        });

        doc.scroll_to(150.0);
        doc.scroll_to(150.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_scroll_into_view() {
        let mut doc = Document::default();
        let body = doc.body();
        let section = doc.append_element(body, "section", &[("id", "wilayas")]).unwrap();
        doc.set_rect(section, DOMRect::from_xywh(0.0, 900.0, 1024.0, 400.0)).unwrap();

        doc.scroll_into_view(section, ScrollIntoViewOptions::smooth_start()).unwrap();
        assert_eq!(doc.scroll_y(), 900.0);
        assert_eq!(doc.last_scroll_behavior(), Some(ScrollBehavior::Smooth));
    }

    #[test]
    fn test_element_errors() {
        let mut doc = Document::default();
        let text = doc.create_text_node("plain");
        assert_eq!(doc.element(text).err(), Some(DomError::NotAnElement(text)));
        assert_eq!(
            doc.set_attribute(NodeId(500), "id", "x"),
            Err(DomError::NotFound(NodeId(500)))
        );
    }

    #[test]
    fn test_content_loaded_fires_once() {
        let mut doc = Document::default();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let window = doc.window();
        doc.add_event_listener(window, DomEventType::DOMContentLoaded, move |_, _| {
            seen.set(seen.get() + 1)
        });

        doc.finish_loading();
        doc.finish_loading();
        assert_eq!(count.get(), 1);
        assert_eq!(doc.ready_state(), ReadyState::Complete);
    }

    #[test]
    fn test_clear_children_frees_nodes_and_listeners() {
        let mut doc = Document::default();
        let body = doc.body();
        let grid = doc.append_element(body, "div", &[]).unwrap();
        let card = doc.append_element(grid, "a", &[("href", "#top")]).unwrap();
        doc.set_text_content(card, "16").unwrap();

        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        doc.add_event_listener(card, DomEventType::Click, move |_, _| seen.set(seen.get() + 1));
        let live = doc.tree().len();

        doc.clear_children(grid).unwrap();
        assert_eq!(doc.tree().len(), live - 2);

        // The freed slot comes back for the next element
        let fresh = doc.append_element(grid, "a", &[]).unwrap();
        doc.click(fresh);
        assert_eq!(hits.get(), 0);
    }
}
