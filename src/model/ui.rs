//! UI state - popups, focus, notices and the enabled flag

use super::link_dialog::{DialogField, LinkDialogState};

/// Shown when the clipboard cannot be read for the plain-paste button
pub const CLIPBOARD_DENIED_NOTICE: &str =
    "Impossible d'accéder au presse-papiers. Utilisez Ctrl+V pour coller.";

// ============================================================================
// Popup System
// ============================================================================

/// The popup currently shown over the editor, if any. At most one is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    ColorPicker,
    LinkDialog(LinkDialogState),
}

/// Toolbar controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarState {
    Idle,
    ColorPickerOpen,
    LinkDialogOpen,
}

/// Where keyboard focus is within this editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is elsewhere on the page
    #[default]
    None,
    Content,
    Dialog(DialogField),
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub active_popup: Option<PopupState>,
    pub focus: Focus,
    /// Message shown to the user until dismissed
    pub notice: Option<String>,
    /// When false the surface is read-only and toolbar, keys and paste do
    /// nothing
    pub enabled: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_popup: None,
            focus: Focus::None,
            notice: None,
            enabled: true,
        }
    }

    pub fn toolbar_state(&self) -> ToolbarState {
        match self.active_popup {
            None => ToolbarState::Idle,
            Some(PopupState::ColorPicker) => ToolbarState::ColorPickerOpen,
            Some(PopupState::LinkDialog(_)) => ToolbarState::LinkDialogOpen,
        }
    }

    pub fn has_popup(&self) -> bool {
        self.active_popup.is_some()
    }

    pub fn open_popup(&mut self, state: PopupState) {
        self.active_popup = Some(state);
    }

    pub fn close_popup(&mut self) {
        self.active_popup = None;
    }

    pub fn is_color_picker_open(&self) -> bool {
        matches!(self.active_popup, Some(PopupState::ColorPicker))
    }

    pub fn link_dialog(&self) -> Option<&LinkDialogState> {
        match &self.active_popup {
            Some(PopupState::LinkDialog(dialog)) => Some(dialog),
            _ => None,
        }
    }

    pub fn link_dialog_mut(&mut self) -> Option<&mut LinkDialogState> {
        match &mut self.active_popup {
            Some(PopupState::LinkDialog(dialog)) => Some(dialog),
            _ => None,
        }
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter text, e.g. "1 caractère", "12 caractères"
pub fn counter_label(count: usize) -> String {
    if count == 1 {
        format!("{} caractère", count)
    } else {
        format!("{} caractères", count)
    }
}
