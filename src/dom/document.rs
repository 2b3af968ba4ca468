//! Slab-backed node tree for one editable surface

use std::sync::atomic::{AtomicU64, Ordering};

use slab::Slab;

use super::node::{is_block_element, Attribute, ElementData, Node, NodeData, NodeId};

/// A tree of nodes hanging off a single [`NodeData::Root`].
///
/// Node ids are slab keys. Removed subtrees free their keys, so a stale id
/// may later point at an unrelated node; callers holding ids across edits
/// must re-validate them (see [`Document::point_is_valid`]).
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Slab<Node>,
    root: NodeId,
}

/// Source of [`Node::serial`] values, shared by every document so that a
/// rebuilt tree never repeats the serials of the one it replaced
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

fn next_serial() -> u64 {
    NEXT_SERIAL.fetch_add(1, Ordering::Relaxed)
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only an empty root
    pub fn new() -> Self {
        let mut nodes = Slab::new();
        let mut node = Node::new(NodeData::Root);
        node.serial = next_serial();
        let root = nodes.insert(node);
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node(self.root).children.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[track_caller]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[track_caller]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    fn insert_node(&mut self, data: NodeData) -> NodeId {
        let mut node = Node::new(data);
        node.serial = next_serial();
        self.nodes.insert(node)
    }

    /// Creation stamp of a node. Unlike ids, serials are never reused.
    pub fn serial(&self, id: NodeId) -> Option<u64> {
        self.nodes.get(id).map(|n| n.serial)
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    pub fn create_element(&mut self, name: &str, attrs: Vec<Attribute>) -> NodeId {
        self.insert_node(NodeData::Element(ElementData::with_attrs(name, attrs)))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.insert_node(NodeData::Text(text.to_string()))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.insert_node(NodeData::Comment(text.to_string()))
    }

    /// Copy a node without its children and without a parent
    pub fn clone_shallow(&mut self, id: NodeId) -> NodeId {
        let data = self.node(id).data.clone();
        self.insert_node(data)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.node(parent).children.iter().position(|&c| c == id)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).and_then(|n| n.tag())
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.is_text())
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).and_then(|n| n.text())
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.nodes.get(id).and_then(|n| n.element())
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id).and_then(|n| n.element_mut())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attr(name))
    }

    /// Range length of a node (chars for text, child count otherwise)
    pub fn length(&self, id: NodeId) -> usize {
        self.nodes.get(id).map(|n| n.length()).unwrap_or(0)
    }

    /// True if `id` is a live node whose parent chain reaches the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.nodes.get(current).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Ancestors from the parent upwards, excluding the root
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if ancestor == self.root {
                break;
            }
            out.push(ancestor);
            current = self.parent(ancestor);
        }
        out
    }

    /// Nearest ancestor below the root whose tag satisfies `pred`
    pub fn find_ancestor(&self, id: NodeId, pred: impl Fn(&str) -> bool) -> Option<NodeId> {
        self.ancestors(id)
            .into_iter()
            .find(|&a| self.tag(a).is_some_and(&pred))
    }

    /// The child of the root that contains `id` (or `id` itself)
    pub fn top_level_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let parent = self.parent(current)?;
            if parent == self.root {
                return Some(current);
            }
            current = parent;
        }
    }

    /// All descendants of `id` in document order, excluding `id`
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Text nodes under the root, in document order
    pub fn text_nodes(&self) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&id| self.is_text(id))
            .collect()
    }

    /// Concatenated text of every descendant text node
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.text(id) {
            out.push_str(text);
        }
        for child in self.descendants(id) {
            if let Some(text) = self.text(child) {
                out.push_str(text);
            }
        }
        out
    }

    /// Rendered text, like `HTMLElement.innerText`: `<br>` becomes a
    /// newline, block elements sit on their own lines and paragraphs are
    /// separated by a blank line. Breaks at either end are dropped.
    pub fn inner_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut pending = 0;
        self.collect_inner_text(id, &mut out, &mut pending);
        out
    }

    /// `pending` holds the line breaks owed before the next text
    fn collect_inner_text(&self, id: NodeId, out: &mut String, pending: &mut usize) {
        for &child in self.children(id) {
            let node = self.node(child);
            match &node.data {
                // Source formatting between blocks
                NodeData::Text(text) if text.contains('\n') && text.trim().is_empty() => {}
                NodeData::Text(text) if !text.is_empty() => {
                    if !out.is_empty() {
                        out.extend(std::iter::repeat('\n').take(*pending));
                    }
                    *pending = 0;
                    out.push_str(text);
                }
                NodeData::Element(el) if el.name == "br" => {
                    if !out.is_empty() {
                        out.extend(std::iter::repeat('\n').take(*pending));
                    }
                    *pending = 0;
                    out.push('\n');
                }
                NodeData::Element(el) if is_block_element(&el.name) => {
                    let breaks = if el.name == "p" { 2 } else { 1 };
                    *pending = (*pending).max(breaks);
                    self.collect_inner_text(child, out, pending);
                    *pending = (*pending).max(breaks);
                }
                NodeData::Element(_) => self.collect_inner_text(child, out, pending),
                NodeData::Text(_) | NodeData::Comment(_) | NodeData::Root => {}
            }
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Unlink a node from its parent. The subtree stays allocated.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.parent(id) {
            self.node_mut(parent).children.retain(|&c| c != id);
            self.node_mut(id).parent = None;
        }
    }

    /// Insert `child` into `parent` at `index`, detaching it first
    pub fn insert_at(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.detach(child);
        let children = &mut self.node_mut(parent).children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.node_mut(child).parent = Some(parent);
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let len = self.children(parent).len();
        self.insert_at(parent, len, child);
    }

    pub fn insert_before(&mut self, sibling: NodeId, child: NodeId) {
        if let (Some(parent), Some(index)) = (self.parent(sibling), self.index_in_parent(sibling)) {
            self.insert_at(parent, index, child);
        }
    }

    pub fn insert_after(&mut self, sibling: NodeId, child: NodeId) {
        if let (Some(parent), Some(index)) = (self.parent(sibling), self.index_in_parent(sibling)) {
            self.insert_at(parent, index + 1, child);
        }
    }

    /// Move every child of `from` to the end of `to`, keeping order
    pub fn reparent_children(&mut self, from: NodeId, to: NodeId) {
        let children = std::mem::take(&mut self.node_mut(from).children);
        for child in children {
            self.node_mut(child).parent = None;
            self.append_child(to, child);
        }
    }

    /// Detach a node and free it together with all of its descendants
    pub fn remove_subtree(&mut self, id: NodeId) {
        if id == self.root || !self.contains(id) {
            return;
        }
        self.detach(id);
        let mut doomed = self.descendants(id);
        doomed.push(id);
        for node in doomed {
            self.nodes.remove(node);
        }
    }

    /// Free every child of `id`
    pub fn clear_children(&mut self, id: NodeId) {
        for child in self.children(id).to_vec() {
            self.remove_subtree(child);
        }
    }

    /// Replace an element by its children, in place and in order
    pub fn unwrap_node(&mut self, id: NodeId) {
        let (Some(parent), Some(index)) = (self.parent(id), self.index_in_parent(id)) else {
            return;
        };
        let children = std::mem::take(&mut self.node_mut(id).children);
        for (offset, child) in children.into_iter().enumerate() {
            self.node_mut(child).parent = None;
            self.insert_at(parent, index + offset, child);
        }
        self.remove_subtree(id);
    }

    /// Wrap consecutive siblings in a new element placed where the first was
    pub fn wrap_nodes(&mut self, nodes: &[NodeId], name: &str, attrs: Vec<Attribute>) -> Option<NodeId> {
        let first = *nodes.first()?;
        let wrapper = self.create_element(name, attrs);
        self.insert_before(first, wrapper);
        for &node in nodes {
            self.append_child(wrapper, node);
        }
        Some(wrapper)
    }

    /// Append to the payload of a text node
    pub fn push_text(&mut self, id: NodeId, text: &str) {
        if let Some(NodeData::Text(existing)) = self.nodes.get_mut(id).map(|n| &mut n.data) {
            existing.push_str(text);
        }
    }

    /// Split a text node at a char offset. The original keeps the head and
    /// the returned node, inserted right after it, holds the tail.
    pub fn split_text(&mut self, id: NodeId, offset: usize) -> Option<NodeId> {
        let text = self.text(id)?;
        let byte = text
            .char_indices()
            .nth(offset)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let tail = text[byte..].to_string();
        if let NodeData::Text(head) = &mut self.node_mut(id).data {
            head.truncate(byte);
        }
        let new_node = self.create_text(&tail);
        self.insert_after(id, new_node);
        Some(new_node)
    }

    /// Deep-copy a subtree from another document under `parent` here
    pub fn import_subtree(&mut self, source: &Document, source_id: NodeId, parent: NodeId) -> NodeId {
        let copy = self.insert_node(source.node(source_id).data.clone());
        self.append_child(parent, copy);
        for &child in source.children(source_id) {
            self.import_subtree(source, child, copy);
        }
        copy
    }
}
