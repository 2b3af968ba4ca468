//! An implementation of html5ever's sink trait, parsing HTML fragments into
//! a [`Document`].

use std::borrow::Cow;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;

use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeBuilderOpts, TreeSink};
use html5ever::{ParseOpts, QualName};

use super::document::Document;
use super::node::{Attribute, NodeId};

/// Tree sink that builds a full html/head/body document into our arena
struct DocumentSink {
    document: RefCell<Document>,
    /// Qualified names of created elements, needed by the tree builder
    names: RefCell<HashMap<NodeId, QualName>>,
    errors: RefCell<Vec<Cow<'static, str>>>,
}

impl DocumentSink {
    fn new() -> Self {
        Self {
            document: RefCell::new(Document::new()),
            names: RefCell::new(HashMap::new()),
            errors: RefCell::new(Vec::new()),
        }
    }

    #[track_caller]
    fn doc(&self) -> RefMut<'_, Document> {
        self.document.borrow_mut()
    }
}

fn to_attribute(attr: html5ever::Attribute) -> Attribute {
    Attribute::new(attr.name.local.to_string().to_ascii_lowercase(), attr.value.to_string())
}

impl TreeSink for DocumentSink {
    type Output = Document;

    // we use the ID of the nodes in the tree as the handle
    type Handle = NodeId;

    type ElemName<'a>
        = Ref<'a, QualName>
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        for error in self.errors.borrow().iter() {
            tracing::trace!(target: "parser", %error, "html parse error");
        }
        self.document.into_inner()
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        self.errors.borrow_mut().push(msg);
    }

    fn get_document(&self) -> Self::Handle {
        self.document.borrow().root()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        Ref::map(self.names.borrow(), |names| {
            names
                .get(target)
                .expect("TreeSink::elem_name called on a node which is not an element!")
        })
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<html5ever::Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let attrs = attrs.into_iter().map(to_attribute).collect();
        let id = self.doc().create_element(&name.local, attrs);
        self.names.borrow_mut().insert(id, name);
        id
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        self.doc().create_comment(&text)
    }

    fn create_pi(&self, _target: StrTendril, data: StrTendril) -> Self::Handle {
        self.doc().create_comment(&data)
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        match child {
            NodeOrText::AppendNode(id) => self.doc().append_child(*parent, id),
            // If content to append is text, first attempt to append it to the last child of parent.
            // Else create a new text node and append it to the parent
            NodeOrText::AppendText(text) => {
                let last = self.document.borrow().children(*parent).last().copied();
                if !self.extend_text(last, &text) {
                    let mut doc = self.doc();
                    let id = doc.create_text(&text);
                    doc.append_child(*parent, id);
                }
            }
        }
    }

    // Note: The tree builder promises we won't have a text node after the insertion point.
    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        match new_node {
            NodeOrText::AppendNode(id) => self.doc().insert_before(*sibling, id),
            NodeOrText::AppendText(text) => {
                let previous = {
                    let doc = self.document.borrow();
                    doc.index_in_parent(*sibling)
                        .filter(|&i| i > 0)
                        .and_then(|i| doc.parent(*sibling).map(|p| doc.children(p)[i - 1]))
                };
                if !self.extend_text(previous, &text) {
                    let mut doc = self.doc();
                    let id = doc.create_text(&text);
                    doc.insert_before(*sibling, id);
                }
            }
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = self.document.borrow().parent(*element).is_some();
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<html5ever::Attribute>) {
        let mut doc = self.doc();
        if let Some(el) = doc.element_mut(*target) {
            for attr in attrs.into_iter().map(to_attribute) {
                if !el.has_attr(&attr.name) {
                    el.attrs.push(attr);
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.doc().detach(*target);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        self.doc().reparent_children(*node, *new_parent);
    }
}

impl DocumentSink {
    /// Append `text` onto an existing text node in place
    fn extend_text(&self, target: Option<NodeId>, text: &str) -> bool {
        let Some(target) = target else {
            return false;
        };
        let mut doc = self.doc();
        if !doc.is_text(target) {
            return false;
        }
        doc.push_text(target, text);
        true
    }
}

/// Parse an HTML fragment as the body content of a standards-mode document.
///
/// Returns a document whose root children are the fragment's top-level
/// nodes. The parser's own error recovery applies; parsing never fails.
pub fn parse_fragment(html: &str) -> Document {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            exact_errors: false,
            scripting_enabled: false, // Enables parsing of <noscript> tags
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };

    // Opening the body explicitly keeps leading <script>/<style> content in
    // the body instead of letting the tree builder move it into <head>.
    let input = format!("<!DOCTYPE html><body>{html}");
    let parsed = html5ever::parse_document(DocumentSink::new(), opts).one(input.as_str());

    let mut fragment = Document::new();
    if let Some(body) = find_body(&parsed) {
        let root = fragment.root();
        for &child in parsed.children(body) {
            fragment.import_subtree(&parsed, child, root);
        }
    }
    fragment
}

fn find_body(doc: &Document) -> Option<NodeId> {
    let html = doc
        .children(doc.root())
        .iter()
        .copied()
        .find(|&id| doc.tag(id) == Some("html"))?;
    doc.children(html)
        .iter()
        .copied()
        .find(|&id| doc.tag(id) == Some("body"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_some_html() {
        let doc = parse_fragment("<p>hello <strong>world</strong></p>");
        let root = doc.root();
        assert_eq!(doc.children(root).len(), 1);
        let p = doc.children(root)[0];
        assert_eq!(doc.tag(p), Some("p"));
        assert_eq!(doc.text_content(p), "hello world");
    }

    #[test]
    fn leading_script_stays_in_fragment() {
        let doc = parse_fragment("<script>x</script>y");
        assert_eq!(doc.text_content(doc.root()), "xy");
    }

    #[test]
    fn adjacent_text_is_merged() {
        let doc = parse_fragment("a&amp;b");
        let root = doc.root();
        assert_eq!(doc.children(root).len(), 1);
        assert_eq!(doc.text(doc.children(root)[0]), Some("a&b"));
    }

    #[test]
    fn attribute_names_are_lowercase() {
        let doc = parse_fragment("<p ONCLICK=\"x\">a</p>");
        let p = doc.children(doc.root())[0];
        assert_eq!(doc.attr(p, "onclick"), Some("x"));
    }
}
