//! Selection handling for the editable surface.
//!
//! The live selection is a [`DomRange`](crate::dom::DomRange) held by the
//! model. Interruptions that steal focus (the link dialog) snapshot it with
//! a [`SelectionManager`] and put it back afterwards.
//!
//! # Example
//!
//! ```ignore
//! use rich_editor::editable::SelectionManager;
//!
//! let mut manager = SelectionManager::default();
//! manager.save(&document, Some(&range));
//! // ... the document changes ...
//! if let Some(range) = manager.restore(&document) {
//!     // still points at live nodes
//! }
//! ```

mod selection;

pub use selection::{SavedPoint, SavedSelection, SelectionManager};
