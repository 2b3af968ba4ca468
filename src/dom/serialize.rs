//! HTML serialization of a document subtree

use std::fmt::Write;

use super::document::Document;
use super::node::{is_raw_text_element, is_void_element, NodeData, NodeId};

impl Document {
    /// Serialize the children of `id`, like `Element.innerHTML`
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_node(child, &mut out);
        }
        out
    }

    /// Serialize `id` itself and its subtree, like `Element.outerHTML`
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        match &node.data {
            NodeData::Root => {
                for &child in &node.children {
                    self.write_node(child, out);
                }
            }
            NodeData::Text(text) => {
                let raw = node
                    .parent
                    .and_then(|p| self.tag(p))
                    .is_some_and(is_raw_text_element);
                if raw {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_text(text));
                }
            }
            NodeData::Comment(text) => {
                let _ = write!(out, "<!--{text}-->");
            }
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(&el.name);
                for attr in &el.attrs {
                    let _ = write!(out, " {}=\"{}\"", attr.name, escape_attribute(&attr.value));
                }
                out.push('>');
                if is_void_element(&el.name) {
                    return;
                }
                for &child in &node.children {
                    self.write_node(child, out);
                }
                let _ = write!(out, "</{}>", el.name);
            }
        }
    }
}

/// Escape text content the way browsers do for `innerHTML`
fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).replace('\u{a0}', "&nbsp;")
}

fn escape_attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).replace('\u{a0}', "&nbsp;")
}
