//! Boundary points and ranges over a [`Document`], DOM-style.
//!
//! A point inside a text node counts characters; a point inside any other
//! node counts children (offset `k` sits before child `k`).

use std::cmp::Ordering;

use super::document::Document;
use super::node::NodeId;

/// A boundary point: a node and an offset within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomPoint {
    pub node: NodeId,
    pub offset: usize,
}

impl DomPoint {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// A selection range with anchor (where it started) and focus (where it
/// ends). The anchor may come after the focus for backward selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomRange {
    pub anchor: DomPoint,
    pub focus: DomPoint,
}

impl DomRange {
    pub fn new(anchor: DomPoint, focus: DomPoint) -> Self {
        Self { anchor, focus }
    }

    /// Create a collapsed range (caret)
    pub fn collapsed(point: DomPoint) -> Self {
        Self {
            anchor: point,
            focus: point,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

impl Document {
    /// A point is valid if its node is alive, attached under the root and
    /// the offset is within the node's length.
    pub fn point_is_valid(&self, point: DomPoint) -> bool {
        self.contains(point.node)
            && self.is_attached(point.node)
            && point.offset <= self.length(point.node)
    }

    pub fn range_is_valid(&self, range: &DomRange) -> bool {
        self.point_is_valid(range.anchor) && self.point_is_valid(range.focus)
    }

    /// Child indices from the root down to `id`
    fn path_to(&self, id: NodeId) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = id;
        while let (Some(_), Some(index)) = (self.parent(current), self.index_in_parent(current)) {
            path.push(index);
            current = self.parent(current).unwrap_or(current);
        }
        path.reverse();
        path
    }

    /// Compare two points in document order
    pub fn compare_points(&self, a: DomPoint, b: DomPoint) -> Ordering {
        let mut key_a = self.path_to(a.node);
        key_a.push(a.offset);
        let mut key_b = self.path_to(b.node);
        key_b.push(b.offset);
        key_a.cmp(&key_b)
    }

    /// Start and end of a range in document order
    pub fn ordered(&self, range: &DomRange) -> (DomPoint, DomPoint) {
        if self.compare_points(range.anchor, range.focus) == Ordering::Greater {
            (range.focus, range.anchor)
        } else {
            (range.anchor, range.focus)
        }
    }

    /// The point before `id` in its parent
    pub fn point_before(&self, id: NodeId) -> Option<DomPoint> {
        Some(DomPoint::new(self.parent(id)?, self.index_in_parent(id)?))
    }

    /// The point after `id` in its parent
    pub fn point_after(&self, id: NodeId) -> Option<DomPoint> {
        Some(DomPoint::new(self.parent(id)?, self.index_in_parent(id)? + 1))
    }

    /// Plain text covered by a range, like `Selection.toString()`
    pub fn range_text(&self, range: &DomRange) -> String {
        let (start, end) = self.ordered(range);
        let mut out = String::new();
        for id in self.text_nodes() {
            let Some(text) = self.text(id) else {
                continue;
            };
            let len = text.chars().count();
            let from = if id == start.node {
                start.offset
            } else if self.compare_points(DomPoint::new(id, 0), start) == Ordering::Less {
                continue;
            } else {
                0
            };
            let to = if id == end.node {
                end.offset
            } else if self.compare_points(DomPoint::new(id, len), end) == Ordering::Greater {
                continue;
            } else {
                len
            };
            if from < to {
                out.extend(text.chars().skip(from).take(to - from));
            }
        }
        out
    }

    /// A range spanning all of the root's content
    pub fn full_range(&self) -> DomRange {
        let root = self.root();
        DomRange::new(
            DomPoint::new(root, 0),
            DomPoint::new(root, self.children(root).len()),
        )
    }

    /// A caret after the last child of the root
    pub fn end_point(&self) -> DomPoint {
        let root = self.root();
        DomPoint::new(root, self.children(root).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_fragment;

    #[test]
    fn test_compare_text_and_element_points() {
        let doc = parse_fragment("<p>ab</p><p>cd</p>");
        let root = doc.root();
        let p2 = doc.children(root)[1];
        let t1 = doc.children(doc.children(root)[0])[0];

        assert_eq!(
            doc.compare_points(DomPoint::new(t1, 2), DomPoint::new(root, 1)),
            Ordering::Less
        );
        assert_eq!(
            doc.compare_points(DomPoint::new(root, 1), DomPoint::new(p2, 0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_range_text_spans_nodes() {
        let doc = parse_fragment("<p>hello <em>big</em> world</p>");
        let texts = doc.text_nodes();
        let range = DomRange::new(DomPoint::new(texts[0], 2), DomPoint::new(texts[2], 3));
        assert_eq!(doc.range_text(&range), "llo big wo");
    }

    #[test]
    fn test_backward_range_is_ordered() {
        let doc = parse_fragment("abc");
        let t = doc.text_nodes()[0];
        let range = DomRange::new(DomPoint::new(t, 3), DomPoint::new(t, 1));
        assert_eq!(doc.range_text(&range), "bc");
    }

    #[test]
    fn test_point_validity() {
        let doc = parse_fragment("abc");
        let t = doc.text_nodes()[0];
        assert!(doc.point_is_valid(DomPoint::new(t, 3)));
        assert!(!doc.point_is_valid(DomPoint::new(t, 4)));
        assert!(!doc.point_is_valid(DomPoint::new(999, 0)));
    }
}
