//! Editor model - the complete state of one editor instance
//!
//! State types follow the Elm Architecture: messages are applied to an
//! [`EditorModel`] by the functions in `update`.

pub mod link_dialog;
pub mod ui;

pub use link_dialog::{DialogField, LinkDialogState, LinkRequest, EMPTY_URL_MESSAGE};
pub use ui::{counter_label, Focus, PopupState, ToolbarState, UiState, CLIPBOARD_DENIED_NOTICE};

use crate::config::EditorConfig;
use crate::dom::{parse_fragment, Document, DomPoint, DomRange};
use crate::editable::SelectionManager;
use crate::keymap::{default_bindings, KeyContext, Keymap};
use crate::sanitize::clean_html;

/// State of one mounted editor
#[derive(Debug)]
pub struct EditorModel {
    /// Immutable after creation
    pub config: EditorConfig,
    /// The editable surface
    pub document: Document,
    /// The host selection, if it is inside the surface
    pub selection: Option<DomRange>,
    /// Snapshot kept while the link dialog is open
    pub saved_selection: SelectionManager,
    pub ui: UiState,
    pub keymap: Keymap,
    /// Characters in the trimmed plain text
    pub char_count: usize,
    pub destroyed: bool,
}

impl EditorModel {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            document: Document::new(),
            selection: None,
            saved_selection: SelectionManager::new(),
            ui: UiState::new(),
            keymap: Keymap::with_bindings(default_bindings()),
            char_count: 0,
            destroyed: false,
        }
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replace the surface content verbatim. The selection is dropped.
    pub fn set_content(&mut self, html: &str) {
        self.document = parse_fragment(html);
        self.selection = None;
        self.recount();
    }

    /// Recompute the character counter. The count is in Unicode scalar
    /// values of the trimmed rendered text, so an emoji counts as one.
    pub fn recount(&mut self) {
        self.char_count = self.plain_text().trim().chars().count();
    }

    /// Sanitized HTML of the surface
    pub fn value(&self) -> String {
        clean_html(&self.document.inner_html(self.document.root()))
    }

    /// Rendered text of the surface
    pub fn plain_text(&self) -> String {
        self.document.inner_text(self.document.root())
    }

    pub fn counter_text(&self) -> String {
        counter_label(self.char_count)
    }

    /// The selection if it still points into the live tree
    pub fn current_range(&self) -> Option<DomRange> {
        self.selection
            .filter(|range| self.document.range_is_valid(range))
    }

    /// The selection, or a caret at the end of the surface
    pub fn range_or_end(&self) -> DomRange {
        self.current_range()
            .unwrap_or_else(|| DomRange::collapsed(self.document.end_point()))
    }

    /// Select the whole surface
    pub fn select_all(&mut self) {
        self.selection = Some(self.document.full_range());
    }

    /// Select characters `start..end` of the surface's text nodes, counted
    /// in document order. Offsets past the end clamp to the end.
    pub fn select_text(&mut self, start: usize, end: usize) {
        let anchor = self.text_point(start);
        let focus = self.text_point(end);
        self.selection = Some(DomRange::new(anchor, focus));
    }

    fn text_point(&self, mut offset: usize) -> DomPoint {
        let doc = &self.document;
        let mut last = None;
        for id in doc.text_nodes() {
            let len = doc.length(id);
            if offset <= len {
                return DomPoint::new(id, offset);
            }
            offset -= len;
            last = Some(DomPoint::new(id, len));
        }
        last.unwrap_or_else(|| doc.end_point())
    }

    pub fn has_selected_text(&self) -> bool {
        self.current_range()
            .is_some_and(|range| !self.document.range_text(&range).is_empty())
    }

    /// Inert models ignore toolbar, keyboard and paste input
    pub fn is_inert(&self) -> bool {
        self.destroyed || !self.ui.enabled
    }

    /// Context for conditional keybindings
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            has_selection: self.has_selected_text(),
            content_focused: self.ui.focus == Focus::Content,
            link_dialog_open: self.ui.link_dialog().is_some(),
            color_picker_open: self.ui.is_color_picker_open(),
            url_field_focused: self.ui.focus == Focus::Dialog(DialogField::Url),
        }
    }
}
