//! Range surgery shared by the formatting commands: splitting text at the
//! range boundaries, finding contained nodes, isolating a node out of a
//! wrapper, deleting and inserting content.

use std::cmp::Ordering;

use crate::dom::{Document, DomPoint, DomRange, NodeId};

/// Split text nodes at both ends of `range` so that every boundary sits
/// between nodes. Returns `(start, end)` in document order.
pub(crate) fn split_boundaries(doc: &mut Document, range: &DomRange) -> (DomPoint, DomPoint) {
    let (start, end) = doc.ordered(range);

    // The end goes first so the start split cannot move it
    let (end, _) = split_at(doc, end);
    let (start, tail) = split_at(doc, start);

    let mut end = end;
    if let Some(tail) = tail {
        if let (Some(parent), Some(index)) = (doc.parent(tail), doc.index_in_parent(tail)) {
            if end.node == parent && end.offset >= index {
                end.offset += 1;
            }
        }
    }
    (start, end)
}

fn split_at(doc: &mut Document, point: DomPoint) -> (DomPoint, Option<NodeId>) {
    if !doc.is_text(point.node) {
        return (point, None);
    }
    if point.offset == 0 {
        return (doc.point_before(point.node).unwrap_or(point), None);
    }
    if point.offset >= doc.length(point.node) {
        return (doc.point_after(point.node).unwrap_or(point), None);
    }
    match doc.split_text(point.node, point.offset) {
        Some(tail) => (doc.point_before(tail).unwrap_or(point), Some(tail)),
        None => (point, None),
    }
}

/// True if the whole of `id` lies between `start` and `end`
pub(crate) fn is_contained(doc: &Document, id: NodeId, start: DomPoint, end: DomPoint) -> bool {
    let (Some(before), Some(after)) = (doc.point_before(id), doc.point_after(id)) else {
        return false;
    };
    doc.compare_points(before, start) != Ordering::Less
        && doc.compare_points(after, end) != Ordering::Greater
}

/// True if `first..=last` overlaps the range. A collapsed range overlaps
/// the nodes it touches.
pub(crate) fn intersects(
    doc: &Document,
    first: NodeId,
    last: NodeId,
    start: DomPoint,
    end: DomPoint,
) -> bool {
    let (Some(before), Some(after)) = (doc.point_before(first), doc.point_after(last)) else {
        return false;
    };
    if start == end {
        doc.compare_points(before, start) != Ordering::Greater
            && doc.compare_points(start, after) != Ordering::Greater
    } else {
        doc.compare_points(before, end) == Ordering::Less
            && doc.compare_points(after, start) == Ordering::Greater
    }
}

/// Every node fully inside the range, in document order
pub(crate) fn contained_nodes(doc: &Document, start: DomPoint, end: DomPoint) -> Vec<NodeId> {
    doc.descendants(doc.root())
        .into_iter()
        .filter(|&id| is_contained(doc, id, start, end))
        .collect()
}

/// Text nodes inside the range that formatting should apply to. Empty
/// nodes and layout whitespace between blocks are skipped.
pub(crate) fn formattable_text_nodes(doc: &Document, start: DomPoint, end: DomPoint) -> Vec<NodeId> {
    contained_nodes(doc, start, end)
        .into_iter()
        .filter(|&id| is_formattable(doc, id))
        .collect()
}

fn is_formattable(doc: &Document, id: NodeId) -> bool {
    let Some(text) = doc.text(id) else {
        return false;
    };
    if text.is_empty() {
        return false;
    }
    if !text.trim().is_empty() {
        return true;
    }
    match doc.parent(id) {
        Some(parent) if parent == doc.root() => false,
        Some(parent) => !matches!(doc.tag(parent), Some("ul" | "ol")),
        None => false,
    }
}

/// Group nodes into runs of adjacent siblings
pub(crate) fn sibling_runs(doc: &Document, nodes: &[NodeId]) -> Vec<Vec<NodeId>> {
    let mut runs: Vec<Vec<NodeId>> = Vec::new();
    for &node in nodes {
        let extends = runs
            .last()
            .and_then(|run| run.last())
            .is_some_and(|&prev| are_adjacent(doc, prev, node));
        if let Some(run) = runs.last_mut().filter(|_| extends) {
            run.push(node);
        } else {
            runs.push(vec![node]);
        }
    }
    runs
}

fn are_adjacent(doc: &Document, prev: NodeId, next: NodeId) -> bool {
    doc.parent(prev).is_some()
        && doc.parent(prev) == doc.parent(next)
        && doc.index_in_parent(prev).map(|i| i + 1) == doc.index_in_parent(next)
}

/// `id` itself or its nearest ancestor (below the root) matching `pred`
pub(crate) fn closest(doc: &Document, id: NodeId, pred: impl Fn(&str) -> bool) -> Option<NodeId> {
    if doc.tag(id).is_some_and(&pred) {
        return Some(id);
    }
    doc.find_ancestor(id, pred)
}

/// Split every element between `node` and `ancestor` so that `ancestor`
/// ends up containing only the path down to `node`. Siblings on either
/// side move into shallow copies of their parents.
pub(crate) fn isolate(doc: &mut Document, node: NodeId, ancestor: NodeId) {
    let mut current = node;
    while current != ancestor {
        let (Some(parent), Some(index)) = (doc.parent(current), doc.index_in_parent(current)) else {
            return;
        };
        if parent == doc.root() {
            return;
        }
        let siblings = doc.children(parent).to_vec();

        let after = &siblings[index + 1..];
        if !after.is_empty() {
            let copy = doc.clone_shallow(parent);
            doc.insert_after(parent, copy);
            for &sibling in after {
                doc.append_child(copy, sibling);
            }
        }

        let before = &siblings[..index];
        if !before.is_empty() {
            let copy = doc.clone_shallow(parent);
            doc.insert_before(parent, copy);
            for &sibling in before {
                doc.append_child(copy, sibling);
            }
        }

        current = parent;
    }
}

/// Remove every ancestor of `node` matching `pred`, only around `node`
pub(crate) fn strip_ancestors(doc: &mut Document, node: NodeId, pred: impl Fn(&str) -> bool + Copy) {
    while let Some(ancestor) = doc.find_ancestor(node, pred) {
        isolate(doc, node, ancestor);
        doc.unwrap_node(ancestor);
    }
}

/// Remove the top-most nodes fully inside a split range. Returns where
/// new content should go.
pub(crate) fn delete_contents(doc: &mut Document, start: DomPoint, end: DomPoint) -> DomPoint {
    let contained = contained_nodes(doc, start, end);
    let doomed: Vec<NodeId> = contained
        .iter()
        .copied()
        .filter(|&id| doc.parent(id).map_or(true, |p| !contained.contains(&p)))
        .collect();
    for id in doomed {
        doc.remove_subtree(id);
    }

    let mut at = start;
    at.offset = at.offset.min(doc.length(at.node));
    at
}

/// Insert nodes at an element boundary point. Returns the point right after
/// the last inserted node.
pub(crate) fn insert_nodes(doc: &mut Document, at: DomPoint, nodes: &[NodeId]) -> DomPoint {
    let at = if doc.is_text(at.node) {
        doc.point_after(at.node).unwrap_or_else(|| doc.end_point())
    } else if doc.contains(at.node) {
        at
    } else {
        doc.end_point()
    };
    let mut index = at.offset;
    for &node in nodes {
        doc.insert_at(at.node, index, node);
        index += 1;
    }
    DomPoint::new(at.node, index)
}

/// A range from the start of the first node to the end of the last
pub(crate) fn range_around(doc: &Document, nodes: &[NodeId]) -> Option<DomRange> {
    let first = *nodes.first()?;
    let last = *nodes.last()?;
    let anchor = if doc.is_text(first) {
        DomPoint::new(first, 0)
    } else {
        doc.point_before(first)?
    };
    let focus = if doc.is_text(last) {
        DomPoint::new(last, doc.length(last))
    } else {
        doc.point_after(last)?
    };
    Some(DomRange::new(anchor, focus))
}
