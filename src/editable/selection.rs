//! Saving and restoring a selection across a focus interruption.

use crate::dom::{Document, DomPoint, DomRange};

/// A boundary point plus the serial of its node at capture time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedPoint {
    pub point: DomPoint,
    pub serial: u64,
}

impl SavedPoint {
    fn capture(doc: &Document, point: DomPoint) -> Option<Self> {
        Some(Self {
            point,
            serial: doc.serial(point.node)?,
        })
    }

    /// The point, if its node is still the same live node and the offset
    /// still fits
    fn resolve(&self, doc: &Document) -> Option<DomPoint> {
        let same_node = doc.serial(self.point.node) == Some(self.serial);
        (same_node && doc.point_is_valid(self.point)).then_some(self.point)
    }
}

/// Opaque snapshot of a selection: anchor and focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedSelection {
    pub anchor: SavedPoint,
    pub focus: SavedPoint,
}

impl SavedSelection {
    pub fn capture(doc: &Document, range: &DomRange) -> Option<Self> {
        Some(Self {
            anchor: SavedPoint::capture(doc, range.anchor)?,
            focus: SavedPoint::capture(doc, range.focus)?,
        })
    }

    /// The saved range, or `None` when the document no longer has it
    pub fn resolve(&self, doc: &Document) -> Option<DomRange> {
        Some(DomRange::new(
            self.anchor.resolve(doc)?,
            self.focus.resolve(doc)?,
        ))
    }
}

/// Holds at most one saved selection. A later save replaces the earlier
/// one; restore consumes it.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    saved: Option<SavedSelection>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `current`. With no current selection nothing is stored and
    /// the previous snapshot is dropped.
    pub fn save(&mut self, doc: &Document, current: Option<&DomRange>) {
        self.saved = current.and_then(|range| SavedSelection::capture(doc, range));
        tracing::trace!(target: "selection", saved = self.saved.is_some(), "save selection");
    }

    /// Take the snapshot back. Returns `None` if nothing was saved or the
    /// saved nodes have gone away since.
    pub fn restore(&mut self, doc: &Document) -> Option<DomRange> {
        let saved = self.saved.take()?;
        let range = saved.resolve(doc);
        if range.is_none() {
            tracing::debug!(target: "selection", "saved selection no longer valid");
        }
        range
    }

    pub fn discard(&mut self) {
        self.saved = None;
    }

    pub fn has_saved(&self) -> bool {
        self.saved.is_some()
    }

    pub fn saved(&self) -> Option<&SavedSelection> {
        self.saved.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_fragment;

    fn range_over_first_text(doc: &Document) -> DomRange {
        let t = doc.text_nodes()[0];
        DomRange::new(DomPoint::new(t, 0), DomPoint::new(t, 2))
    }

    #[test]
    fn test_save_and_restore() {
        let doc = parse_fragment("<p>hello</p>");
        let range = range_over_first_text(&doc);
        let mut manager = SelectionManager::new();

        manager.save(&doc, Some(&range));
        assert!(manager.has_saved());
        assert_eq!(manager.restore(&doc), Some(range));
        // consumed
        assert_eq!(manager.restore(&doc), None);
    }

    #[test]
    fn test_save_without_selection_is_noop() {
        let doc = parse_fragment("<p>hello</p>");
        let mut manager = SelectionManager::new();
        manager.save(&doc, None);
        assert!(!manager.has_saved());
        assert_eq!(manager.restore(&doc), None);
    }

    #[test]
    fn test_restore_after_nodes_removed() {
        let mut doc = parse_fragment("<p>hello</p>");
        let range = range_over_first_text(&doc);
        let mut manager = SelectionManager::new();
        manager.save(&doc, Some(&range));

        let root = doc.root();
        doc.clear_children(root);
        // reuse the freed slots
        let p = doc.create_element("p", vec![]);
        let t = doc.create_text("other");
        doc.append_child(root, p);
        doc.append_child(p, t);

        assert_eq!(manager.restore(&doc), None);
    }

    #[test]
    fn test_restore_after_text_shrinks() {
        let mut doc = parse_fragment("hello");
        let t = doc.text_nodes()[0];
        let range = DomRange::collapsed(DomPoint::new(t, 5));
        let mut manager = SelectionManager::new();
        manager.save(&doc, Some(&range));

        doc.split_text(t, 1);
        assert_eq!(manager.restore(&doc), None);
    }

    #[test]
    fn test_later_save_overwrites() {
        let doc = parse_fragment("hello");
        let t = doc.text_nodes()[0];
        let first = DomRange::collapsed(DomPoint::new(t, 1));
        let second = DomRange::collapsed(DomPoint::new(t, 3));
        let mut manager = SelectionManager::new();
        manager.save(&doc, Some(&first));
        manager.save(&doc, Some(&second));
        assert_eq!(manager.restore(&doc), Some(second));
    }
}
