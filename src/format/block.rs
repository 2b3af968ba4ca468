//! Paragraph-level formatting: lists and alignment.
//!
//! Both work on the top-level lines of the surface. A line is either a
//! block element directly under the root, or a run of inline content ended
//! by a `<br>` (or by the next block).

use crate::dom::{is_block_element, Attribute, Document, DomPoint, DomRange, NodeId};
use crate::sanitize::{InlineStyle, TextAlign};

use super::edit::intersects;

/// Kind of list produced by the list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Block(NodeId),
    /// Inline nodes, possibly ending with their `<br>`
    Inline(Vec<NodeId>),
}

impl Line {
    fn bounds(&self) -> Option<(NodeId, NodeId)> {
        match self {
            Line::Block(id) => Some((*id, *id)),
            Line::Inline(nodes) => Some((*nodes.first()?, *nodes.last()?)),
        }
    }
}

fn is_list(name: &str) -> bool {
    matches!(name, "ul" | "ol")
}

fn lines(doc: &Document) -> Vec<Line> {
    let mut out = Vec::new();
    let mut current = Vec::new();

    for &child in doc.children(doc.root()) {
        match doc.tag(child) {
            Some(tag) if is_block_element(tag) => {
                flush_inline(doc, &mut current, &mut out);
                out.push(Line::Block(child));
            }
            Some("br") => {
                current.push(child);
                flush_inline(doc, &mut current, &mut out);
            }
            _ => current.push(child),
        }
    }
    flush_inline(doc, &mut current, &mut out);
    out
}

fn flush_inline(doc: &Document, current: &mut Vec<NodeId>, out: &mut Vec<Line>) {
    let nodes = std::mem::take(current);
    let has_content = nodes
        .iter()
        .any(|&id| doc.text(id).map_or(true, |text| !text.trim().is_empty()));
    if has_content {
        out.push(Line::Inline(nodes));
    }
}

/// Lines touched by the range, in order. A caret touches one line.
fn touched_lines(doc: &Document, range: &DomRange) -> Vec<Line> {
    let (start, end) = doc.ordered(range);
    let touched = lines(doc).into_iter().filter(|line| {
        line.bounds()
            .is_some_and(|(first, last)| intersects(doc, first, last, start, end))
    });
    if range.is_collapsed() {
        touched.take(1).collect()
    } else {
        touched.collect()
    }
}

/// Keep the caller's range when it survived the edit, otherwise select
/// the given node
fn keep_or_select(doc: &Document, range: &DomRange, fallback: NodeId) -> DomRange {
    if doc.range_is_valid(range) {
        return *range;
    }
    match (doc.point_before(fallback), doc.point_after(fallback)) {
        (Some(before), Some(after)) => DomRange::new(before, after),
        _ => DomRange::collapsed(doc.end_point()),
    }
}

/// Turn the touched lines into a list of `kind`, or turn them back into
/// plain lines when they already all are such lists.
pub(crate) fn toggle_list(doc: &mut Document, range: &DomRange, kind: ListKind) -> DomRange {
    let tag = kind.tag();
    let touched = touched_lines(doc, range);

    if touched.is_empty() {
        if !doc.is_empty() {
            return *range;
        }
        let list = doc.create_element(tag, vec![]);
        let item = doc.create_element("li", vec![]);
        let br = doc.create_element("br", vec![]);
        let root = doc.root();
        doc.append_child(root, list);
        doc.append_child(list, item);
        doc.append_child(item, br);
        return DomRange::collapsed(DomPoint::new(item, 0));
    }

    let all_same_list = touched
        .iter()
        .all(|line| matches!(line, Line::Block(id) if doc.tag(*id) == Some(tag)));
    if all_same_list {
        let mut last = None;
        for line in &touched {
            if let Line::Block(list) = line {
                last = unlist(doc, *list).or(last);
            }
        }
        return match last {
            Some(node) => keep_or_select(doc, range, node),
            None => DomRange::collapsed(doc.end_point()),
        };
    }

    let Some((first, _)) = touched[0].bounds() else {
        return *range;
    };
    let list = doc.create_element(tag, vec![]);
    doc.insert_before(first, list);

    for line in touched {
        match line {
            Line::Block(block) if doc.tag(block).is_some_and(is_list) => {
                for child in doc.children(block).to_vec() {
                    if doc.tag(child) == Some("li") {
                        doc.append_child(list, child);
                    } else if doc.text(child).map_or(true, |t| !t.trim().is_empty()) {
                        let item = doc.create_element("li", vec![]);
                        doc.append_child(list, item);
                        doc.append_child(item, child);
                    }
                }
                doc.remove_subtree(block);
            }
            Line::Block(block) => {
                let attrs = doc
                    .attr(block, "style")
                    .map(|style| vec![Attribute::new("style", style)])
                    .unwrap_or_default();
                let item = doc.create_element("li", attrs);
                doc.append_child(list, item);
                doc.reparent_children(block, item);
                doc.remove_subtree(block);
            }
            Line::Inline(nodes) => {
                let item = doc.create_element("li", vec![]);
                doc.append_child(list, item);
                let (content, br) = split_trailing_br(doc, &nodes);
                for &node in content {
                    doc.append_child(item, node);
                }
                if let Some(br) = br {
                    if content.is_empty() {
                        doc.append_child(item, br);
                    } else {
                        doc.remove_subtree(br);
                    }
                }
            }
        }
    }

    keep_or_select(doc, range, list)
}

/// Replace a list by its items' content, one line per item. Returns the
/// last node moved out, if any.
fn unlist(doc: &mut Document, list: NodeId) -> Option<NodeId> {
    let items: Vec<NodeId> = doc
        .children(list)
        .iter()
        .copied()
        .filter(|&c| doc.tag(c) == Some("li"))
        .collect();
    let next_is_inline = doc
        .point_after(list)
        .and_then(|after| doc.children(after.node).get(after.offset).copied())
        .is_some_and(|next| !doc.tag(next).is_some_and(is_block_element));

    let mut last = None;
    for (i, &item) in items.iter().enumerate() {
        for child in doc.children(item).to_vec() {
            doc.insert_before(list, child);
            last = Some(child);
        }
        if i + 1 < items.len() || next_is_inline {
            let br = doc.create_element("br", vec![]);
            doc.insert_before(list, br);
            last = Some(br);
        }
    }
    doc.remove_subtree(list);
    last
}

fn split_trailing_br<'a>(doc: &Document, nodes: &'a [NodeId]) -> (&'a [NodeId], Option<NodeId>) {
    match nodes.split_last() {
        Some((&last, rest)) if doc.tag(last) == Some("br") => (rest, Some(last)),
        _ => (nodes, None),
    }
}

/// Set `text-align` on the touched lines. Inline lines get a `<div>`.
pub(crate) fn align(doc: &mut Document, range: &DomRange, alignment: TextAlign) -> DomRange {
    let (start, end) = doc.ordered(range);
    let touched = touched_lines(doc, range);
    let mut last = None;

    for line in touched {
        match line {
            Line::Block(block) if doc.tag(block).is_some_and(is_list) => {
                for item in doc.children(block).to_vec() {
                    if doc.tag(item) == Some("li") && intersects(doc, item, item, start, end) {
                        set_text_align(doc, item, alignment);
                        last = Some(item);
                    }
                }
            }
            Line::Block(block) => {
                set_text_align(doc, block, alignment);
                last = Some(block);
            }
            Line::Inline(nodes) => {
                let (content, br) = split_trailing_br(doc, &nodes);
                let style = InlineStyle {
                    color: None,
                    text_align: Some(alignment),
                };
                let attrs = vec![Attribute::new("style", style.to_css())];
                let wrapped = if content.is_empty() {
                    doc.wrap_nodes(&nodes, "div", attrs)
                } else {
                    let div = doc.wrap_nodes(content, "div", attrs);
                    if let Some(br) = br {
                        doc.remove_subtree(br);
                    }
                    div
                };
                last = wrapped.or(last);
            }
        }
    }

    match last {
        Some(node) => keep_or_select(doc, range, node),
        None => *range,
    }
}

fn set_text_align(doc: &mut Document, id: NodeId, alignment: TextAlign) {
    let mut style = doc
        .attr(id, "style")
        .map(InlineStyle::parse)
        .unwrap_or_default();
    style.text_align = Some(alignment);
    if let Some(el) = doc.element_mut(id) {
        el.set_attr("style", style.to_css());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_fragment;

    fn caret_in(doc: &Document, text_index: usize) -> DomRange {
        DomRange::collapsed(DomPoint::new(doc.text_nodes()[text_index], 0))
    }

    #[test]
    fn test_paragraph_becomes_list_item() {
        let mut doc = parse_fragment("<p>one</p><p>two</p>");
        let range = caret_in(&doc, 1);
        toggle_list(&mut doc, &range, ListKind::Unordered);
        assert_eq!(
            doc.inner_html(doc.root()),
            "<p>one</p><ul><li>two</li></ul>"
        );
    }

    #[test]
    fn test_list_toggles_back_to_lines() {
        let mut doc = parse_fragment("<ol><li>a</li><li>b</li></ol>");
        let range = caret_in(&doc, 0);
        let range = toggle_list(&mut doc, &range, ListKind::Ordered);
        assert_eq!(doc.inner_html(doc.root()), "a<br>b");
        assert!(doc.range_is_valid(&range));
    }

    #[test]
    fn test_switch_list_kind() {
        let mut doc = parse_fragment("<ul><li>a</li></ul>");
        let range = caret_in(&doc, 0);
        toggle_list(&mut doc, &range, ListKind::Ordered);
        assert_eq!(doc.inner_html(doc.root()), "<ol><li>a</li></ol>");
    }

    #[test]
    fn test_inline_lines_split_on_br() {
        let mut doc = parse_fragment("a<br>b");
        let range = caret_in(&doc, 1);
        toggle_list(&mut doc, &range, ListKind::Unordered);
        assert_eq!(doc.inner_html(doc.root()), "a<br><ul><li>b</li></ul>");
    }

    #[test]
    fn test_empty_surface_gets_an_item() {
        let mut doc = Document::new();
        let range = DomRange::collapsed(doc.end_point());
        let caret = toggle_list(&mut doc, &range, ListKind::Unordered);
        assert_eq!(doc.inner_html(doc.root()), "<ul><li><br></li></ul>");
        assert!(doc.range_is_valid(&caret));
    }

    #[test]
    fn test_align_block_keeps_color() {
        let mut doc = parse_fragment("<p style=\"color: red;\">x</p>");
        let range = caret_in(&doc, 0);
        align(&mut doc, &range, TextAlign::Center);
        assert_eq!(
            doc.inner_html(doc.root()),
            "<p style=\"color: red; text-align: center;\">x</p>"
        );
    }

    #[test]
    fn test_align_inline_line_wraps_in_div() {
        let mut doc = parse_fragment("left<br>right");
        let range = caret_in(&doc, 0);
        align(&mut doc, &range, TextAlign::Right);
        assert_eq!(
            doc.inner_html(doc.root()),
            "<div style=\"text-align: right;\">left</div>right"
        );
    }
}
