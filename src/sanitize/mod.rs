//! Content cleaning for the editable surface.
//!
//! [`clean_pasted_text`] turns anything on the clipboard into plain text;
//! [`clean_html`] reduces markup to the allow-listed tag and attribute model
//! that is exchanged with the persistence layer.

mod style;

use std::sync::OnceLock;

use regex::Regex;

use crate::dom::{parse_fragment, Attribute, Document, NodeData, NodeId};

pub use style::{safe_color, InlineStyle, TextAlign};

/// Tags that survive [`clean_html`]. Anything else is unwrapped.
pub const ALLOWED_TAGS: &[&str] = &[
    "strong", "em", "u", "ul", "ol", "li", "a", "span", "p", "div", "br",
];

/// Upper bound on parse/rewrite passes before the output is taken as is
const MAX_CLEAN_PASSES: usize = 8;

pub fn is_allowed_tag(name: &str) -> bool {
    ALLOWED_TAGS.contains(&name)
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"))
}

fn numeric_entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&#\d+;").expect("valid regex"))
}

fn zero_width_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\u{200B}-\u{200D}\u{FEFF}]").expect("valid regex"))
}

fn blank_lines_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("valid regex"))
}

fn repeated_spaces_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" {2,}").expect("valid regex"))
}

/// Reduce pasted content to plain text.
///
/// Tags are stripped, the five common entities decoded (numeric references
/// are dropped), typographic punctuation from word processors normalized,
/// runs of blank lines and spaces collapsed, and the result trimmed.
pub fn clean_pasted_text(text: &str) -> String {
    let text = tag_regex().replace_all(text, "");

    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");
    let text = numeric_entity_regex().replace_all(&text, "");

    let text = zero_width_regex().replace_all(&text, "");
    let text = text
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2013}', '\u{2014}'], "-")
        .replace('\u{2026}', "...");

    let text = blank_lines_regex().replace_all(&text, "\n\n");
    let text = repeated_spaces_regex().replace_all(&text, " ");

    text.trim().to_string()
}

/// Canonicalize markup against the allow-list.
///
/// Disallowed elements are unwrapped in place, attributes other than `href`
/// on links and the `color`/`text-align` part of `style` are dropped, and
/// comments are removed. Running the result through again yields the same
/// string.
pub fn clean_html(html: &str) -> String {
    let mut current = clean_once(html);
    for _ in 1..MAX_CLEAN_PASSES {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
    tracing::warn!(
        passes = MAX_CLEAN_PASSES,
        "html cleaning did not reach a fixed point"
    );
    current
}

fn clean_once(html: &str) -> String {
    let source = parse_fragment(html);
    let cleaned = clean_document(&source);
    cleaned.inner_html(cleaned.root())
}

/// Rewrite a document into a new one holding only allow-listed content
pub fn clean_document(source: &Document) -> Document {
    let mut out = Document::new();
    let root = out.root();
    copy_children(source, source.root(), &mut out, root);
    out
}

fn copy_children(source: &Document, from: NodeId, out: &mut Document, to: NodeId) {
    for &child in source.children(from) {
        let Some(node) = source.get(child) else {
            continue;
        };
        match &node.data {
            NodeData::Text(text) => {
                let id = out.create_text(text);
                out.append_child(to, id);
            }
            NodeData::Element(el) if is_allowed_tag(&el.name) => {
                let attrs = filter_attributes(&el.name, &el.attrs);
                let id = out.create_element(&el.name, attrs);
                out.append_child(to, id);
                copy_children(source, child, out, id);
            }
            // Unwrap: the children take the element's place
            NodeData::Element(_) => copy_children(source, child, out, to),
            NodeData::Comment(_) | NodeData::Root => {}
        }
    }
}

fn filter_attributes(tag: &str, attrs: &[Attribute]) -> Vec<Attribute> {
    let mut kept = Vec::new();
    for attr in attrs {
        match attr.name.to_ascii_lowercase().as_str() {
            "href" if tag == "a" => kept.push(Attribute::new("href", attr.value.clone())),
            "style" => {
                let style = InlineStyle::parse(&attr.value);
                if !style.is_empty() {
                    kept.push(Attribute::new("style", style.to_css()));
                }
            }
            _ => {}
        }
    }
    kept
}
