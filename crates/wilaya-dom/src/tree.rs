//! DOM Tree (arena-based allocation)
//!
//! Slots of removed subtrees go on a free list and are handed out again by
//! the next `create_*`, so re-rendering a region keeps the arena at its
//! high-water mark. A `NodeId` of a removed node is stale: it resolves to
//! nothing until its slot is reused.

use crate::{DomError, DomResult, Node, NodeId};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Option<Node>>,
    free_list: Vec<u32>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node::document())],
            free_list: Vec::new(),
        }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())?.as_ref()
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())?.as_mut()
    }

    /// Number of live nodes (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots ever allocated, live or free
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Allocate a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    fn push(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            self.nodes[index as usize] = Some(node);
            return NodeId(index);
        }
        // NONE (u32::MAX) is never handed out
        debug_assert!(self.nodes.len() < NodeId::NONE.index());
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(node));
        id
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let Some(last) = self.get(parent).map(|n| n.last_child) else {
            return Err(DomError::NotFound(parent));
        };
        if self.get(child).is_none() {
            return Err(DomError::NotFound(child));
        }
        if child == NodeId::ROOT || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);
        // Detaching may have changed parent's last child
        let last = if last == child {
            self.get(parent).map_or(NodeId::NONE, |n| n.last_child)
        } else {
            last
        };

        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        match self.get_mut(last) {
            Some(prev) => prev.next_sibling = child,
            None => {
                if let Some(p) = self.get_mut(parent) {
                    p.first_child = child;
                }
            }
        }
        if let Some(p) = self.get_mut(parent) {
            p.last_child = child;
        }
        Ok(child)
    }

    /// Unlink a node from its parent and siblings
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);

        match self.get_mut(prev) {
            Some(p) => p.next_sibling = next,
            None => {
                if let Some(p) = self.get_mut(parent) {
                    p.first_child = next;
                }
            }
        }
        match self.get_mut(next) {
            Some(n) => n.prev_sibling = prev,
            None => {
                if let Some(p) = self.get_mut(parent) {
                    p.last_child = prev;
                }
            }
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Remove every child of `parent` and free the removed subtrees.
    /// Returns the number of nodes freed.
    pub fn remove_children(&mut self, parent: NodeId) -> usize {
        let children: Vec<NodeId> = self.children(parent).map(|(id, _)| id).collect();
        let mut freed = 0;
        for child in children {
            self.detach(child);
            freed += self.free_subtree(child);
        }
        freed
    }

    /// Release `id` and its descendants back to the free list
    fn free_subtree(&mut self, id: NodeId) -> usize {
        if id == NodeId::ROOT {
            return 0;
        }
        let mut doomed = self.descendants(id);
        doomed.push(id);
        let mut freed = 0;
        for node in doomed {
            if let Some(slot) = self.nodes.get_mut(node.index()) {
                if slot.take().is_some() {
                    self.free_list.push(node.0);
                    freed += 1;
                }
            }
        }
        freed
    }

    /// Check whether `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map_or(NodeId::NONE, |n| n.parent);
        }
        false
    }

    /// Iterate over direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let first = self.get(parent).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next: first }
    }

    /// Pre-order list of all descendants of `root` (excluding `root`)
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).map(|(id, _)| id).collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            out.push(id);
            let mut kids: Vec<NodeId> = self.children(id).map(|(id, _)| id).collect();
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Concatenated text of `id` and its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|d| self.get(d).and_then(Node::as_text))
            .collect()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
