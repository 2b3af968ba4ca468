//! Character-level formatting: bold, italic, underline, color, clearing
//! formats and removing links.

use crate::dom::{Attribute, Document, DomRange, NodeId};
use crate::sanitize::InlineStyle;

use super::edit::{
    closest, formattable_text_nodes, range_around, sibling_runs, split_boundaries,
    strip_ancestors,
};

/// An inline wrapper: the tag we create and every tag that counts as it
#[derive(Debug, Clone, Copy)]
pub(crate) struct InlineFormat {
    pub tag: &'static str,
    pub matches: &'static [&'static str],
}

pub(crate) const BOLD: InlineFormat = InlineFormat {
    tag: "strong",
    matches: &["strong", "b"],
};

pub(crate) const ITALIC: InlineFormat = InlineFormat {
    tag: "em",
    matches: &["em", "i"],
};

pub(crate) const UNDERLINE: InlineFormat = InlineFormat {
    tag: "u",
    matches: &["u"],
};

/// Elements removed by "clear formatting". Links are kept.
fn is_inline_format(name: &str) -> bool {
    matches!(
        name,
        "strong"
            | "b"
            | "em"
            | "i"
            | "u"
            | "s"
            | "strike"
            | "span"
            | "font"
            | "sub"
            | "sup"
            | "mark"
            | "small"
            | "big"
            | "code"
    )
}

/// Wrap the selection in `format`, or unwrap it when every selected
/// character already carries it.
pub(crate) fn toggle(doc: &mut Document, range: &DomRange, format: InlineFormat) -> DomRange {
    if range.is_collapsed() {
        return *range;
    }
    let (start, end) = split_boundaries(doc, range);
    let texts = formattable_text_nodes(doc, start, end);
    if texts.is_empty() {
        return DomRange::new(start, end);
    }

    let is_match = |name: &str| format.matches.contains(&name);
    let all_formatted = texts
        .iter()
        .all(|&t| doc.find_ancestor(t, is_match).is_some());

    if all_formatted {
        for &text in &texts {
            strip_ancestors(doc, text, is_match);
        }
    } else {
        let bare: Vec<_> = texts
            .iter()
            .copied()
            .filter(|&t| doc.find_ancestor(t, is_match).is_none())
            .collect();
        for run in sibling_runs(doc, &bare) {
            doc.wrap_nodes(&run, format.tag, vec![]);
        }
    }

    range_around(doc, &texts).unwrap_or(DomRange::new(start, end))
}

/// Give the selected text a foreground color
pub(crate) fn set_color(doc: &mut Document, range: &DomRange, color: &str) -> DomRange {
    if range.is_collapsed() {
        return *range;
    }
    let (start, end) = split_boundaries(doc, range);
    let texts = formattable_text_nodes(doc, start, end);

    for run in sibling_runs(doc, &texts) {
        let whole_span = doc
            .parent(run[0])
            .filter(|&p| doc.tag(p) == Some("span") && doc.children(p).len() == run.len());
        match whole_span {
            Some(span) => set_style_color(doc, span, color),
            None => {
                let style = InlineStyle {
                    color: Some(color.to_string()),
                    text_align: None,
                };
                doc.wrap_nodes(&run, "span", vec![Attribute::new("style", style.to_css())]);
            }
        }
    }

    range_around(doc, &texts).unwrap_or(DomRange::new(start, end))
}

fn set_style_color(doc: &mut Document, id: NodeId, color: &str) {
    let mut style = doc
        .attr(id, "style")
        .map(InlineStyle::parse)
        .unwrap_or_default();
    style.color = Some(color.to_string());
    if let Some(el) = doc.element_mut(id) {
        el.set_attr("style", style.to_css());
    }
}

/// Strip inline formatting (including colors) from the selected text
pub(crate) fn clear_formatting(doc: &mut Document, range: &DomRange) -> DomRange {
    if range.is_collapsed() {
        return *range;
    }
    let (start, end) = split_boundaries(doc, range);
    let texts = formattable_text_nodes(doc, start, end);
    for &text in &texts {
        strip_ancestors(doc, text, is_inline_format);
    }
    range_around(doc, &texts).unwrap_or(DomRange::new(start, end))
}

/// Remove links from the selection. A caret inside a link unlinks all of it.
pub(crate) fn remove_link(doc: &mut Document, range: &DomRange) -> DomRange {
    let is_link = |name: &str| name == "a";

    if range.is_collapsed() {
        if let Some(link) = closest(doc, range.focus.node, is_link) {
            let children = doc.children(link).to_vec();
            doc.unwrap_node(link);
            return range_around(doc, &children).unwrap_or(*range);
        }
        return *range;
    }

    let (start, end) = split_boundaries(doc, range);
    let texts = formattable_text_nodes(doc, start, end);
    for &text in &texts {
        strip_ancestors(doc, text, is_link);
    }
    range_around(doc, &texts).unwrap_or(DomRange::new(start, end))
}
