//! A mounted editor instance and its public API

use crate::commands::Cmd;
use crate::config::{EditorConfig, EditorOptions};
use crate::dom::{Document, DomRange};
use crate::error::EditorError;
use crate::host::Page;
use crate::keymap::{load_default_keymap, Keymap};
use crate::messages::Msg;
use crate::model::{EditorModel, Focus};
use crate::styles::inject_styles;
use crate::update::update;
use crate::view;

/// Handle to one editor mounted in a page container
#[derive(Debug)]
pub struct Editor {
    model: EditorModel,
    container_id: String,
}

impl Editor {
    /// Mount a new editor with default configuration overridden by
    /// `options`
    pub fn mount(page: &mut Page, selector: &str, options: EditorOptions) -> Result<Self, EditorError> {
        Self::mount_with_config(page, selector, EditorConfig::default().merged(options))
    }

    /// Mount a new editor into the container matching `selector`
    pub fn mount_with_config(
        page: &mut Page,
        selector: &str,
        config: EditorConfig,
    ) -> Result<Self, EditorError> {
        let container_id = page
            .resolve(selector)
            .ok_or_else(|| EditorError::Configuration(format!("Container not found: {}", selector)))?
            .to_string();

        inject_styles(page);

        let keymap = Keymap::with_bindings(load_default_keymap());
        let editor = Self {
            model: EditorModel::new(config).with_keymap(keymap),
            container_id,
        };
        editor.render_into(page);
        tracing::info!(container = %editor.container_id, "editor mounted");
        Ok(editor)
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn config(&self) -> &EditorConfig {
        &self.model.config
    }

    /// Read-only access to the state, for hosts and tests
    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Sanitized HTML of the surface
    pub fn get_value(&self) -> String {
        self.model.value()
    }

    /// Replace the content verbatim. The markup is parsed but not
    /// sanitized.
    pub fn set_value(&mut self, html: &str) {
        if self.model.destroyed {
            return;
        }
        self.model.set_content(html);
    }

    pub fn get_plain_text(&self) -> String {
        self.model.plain_text()
    }

    pub fn clear(&mut self) {
        self.set_value("");
    }

    pub fn char_count(&self) -> usize {
        self.model.char_count
    }

    pub fn counter_text(&self) -> String {
        self.model.counter_text()
    }

    // ========================================================================
    // Focus and editability
    // ========================================================================

    pub fn focus(&mut self) {
        if self.model.destroyed {
            return;
        }
        self.model.ui.focus = Focus::Content;
    }

    pub fn is_focused(&self) -> bool {
        self.model.ui.focus == Focus::Content
    }

    pub fn enable(&mut self) {
        if self.model.destroyed {
            return;
        }
        self.model.ui.enabled = true;
    }

    /// Make the surface read-only. Open popups close without applying
    /// anything.
    pub fn disable(&mut self) {
        if self.model.destroyed {
            return;
        }
        self.model.ui.enabled = false;
        self.model.ui.close_popup();
        self.model.saved_selection.discard();
        self.model.ui.focus = Focus::None;
    }

    pub fn is_enabled(&self) -> bool {
        self.model.ui.enabled && !self.model.destroyed
    }

    pub fn notice(&self) -> Option<&str> {
        self.model.ui.notice.as_deref()
    }

    /// Release the tree and empty the container. Later calls do nothing.
    pub fn destroy(&mut self, page: &mut Page) {
        if self.model.destroyed {
            return;
        }
        self.model.destroyed = true;
        self.model.document = Document::new();
        self.model.selection = None;
        self.model.saved_selection.discard();
        self.model.ui.close_popup();
        self.model.ui.focus = Focus::None;
        self.model.char_count = 0;
        page.set_container_html(&self.container_id, "");
        tracing::info!(container = %self.container_id, "editor destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.model.destroyed
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn select_all(&mut self) {
        if self.model.destroyed {
            return;
        }
        self.model.select_all();
    }

    /// Select characters `start..end` of the surface text
    pub fn select_text(&mut self, start: usize, end: usize) {
        if self.model.destroyed {
            return;
        }
        self.model.select_text(start, end);
    }

    /// Set the selection. Ranges that do not point into the surface are
    /// ignored.
    pub fn set_selection(&mut self, range: DomRange) {
        if self.model.document.range_is_valid(&range) {
            self.model.selection = Some(range);
        }
    }

    pub fn selection(&self) -> Option<DomRange> {
        self.model.current_range()
    }

    /// Text covered by the selection
    pub fn selected_text(&self) -> String {
        self.selection()
            .map(|range| self.model.document.range_text(&range))
            .unwrap_or_default()
    }

    /// The live tree, for building selections
    pub fn document(&self) -> &Document {
        &self.model.document
    }

    // ========================================================================
    // Events and rendering
    // ========================================================================

    /// Handle a host event
    pub fn dispatch(&mut self, msg: Msg) -> Cmd {
        update(&mut self.model, msg).unwrap_or_default()
    }

    pub fn render(&self) -> String {
        view::render(&self.model)
    }

    /// Write the chrome into the container. Returns false once destroyed
    /// or if the container is gone.
    pub fn render_into(&self, page: &mut Page) -> bool {
        if self.model.destroyed {
            return false;
        }
        page.set_container_html(&self.container_id, self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::STYLE_ELEMENT_ID;

    fn mounted() -> (Page, Editor) {
        let mut page = Page::new().with_container("editor");
        let editor = Editor::mount(&mut page, "#editor", EditorOptions::default()).unwrap();
        (page, editor)
    }

    #[test]
    fn test_mount_renders_and_injects_styles() {
        let (page, editor) = mounted();
        assert_eq!(editor.container_id(), "editor");
        assert!(page.has_style(STYLE_ELEMENT_ID));
        assert!(page
            .container_html("editor")
            .unwrap()
            .contains("rich-editor-toolbar"));
    }

    #[test]
    fn test_mount_missing_container_fails() {
        let mut page = Page::new();
        let err = Editor::mount(&mut page, "#nope", EditorOptions::default()).unwrap_err();
        assert!(matches!(err, EditorError::Configuration(_)));
        assert!(page.styles().is_empty());
    }

    #[test]
    fn test_destroy_clears_container_and_ignores_later_calls() {
        let (mut page, mut editor) = mounted();
        editor.set_value("<p>x</p>");
        editor.destroy(&mut page);

        assert_eq!(page.container_html("editor"), Some(""));
        editor.set_value("<p>y</p>");
        editor.destroy(&mut page);
        assert_eq!(editor.get_value(), "");
        assert!(!editor.render_into(&mut page));
        assert!(!editor.is_enabled());
    }

    #[test]
    fn test_disable_closes_link_dialog() {
        let (_page, mut editor) = mounted();
        editor.set_value("<p>abc</p>");
        editor.select_text(0, 3);
        editor.focus();
        editor.dispatch(Msg::Toolbar(crate::messages::ToolbarMsg::Command(
            crate::commands::CommandId::InsertLink,
        )));
        assert!(editor.model().ui.link_dialog().is_some());

        editor.disable();
        assert!(editor.model().ui.link_dialog().is_none());
        assert!(!editor.model().saved_selection.has_saved());
    }
}
