//! Message types for the Elm-style architecture
//!
//! Every user gesture on an editor instance arrives as one of these. The
//! host only forwards events that belong to this instance's own elements.

use crate::commands::CommandId;
use crate::dom::DomRange;
use crate::error::EditorError;
use crate::keymap::Keystroke;
use crate::model::DialogField;

/// Toolbar interactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarMsg {
    /// A button with a command was clicked
    Command(CommandId),
    /// The color picker trigger was clicked
    ToggleColorPicker,
    /// A swatch was clicked (index into the configured palette)
    PickColor(usize),
    /// Close the color picker without applying anything
    CloseColorPicker,
}

/// Link dialog interactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDialogMsg {
    /// Show the dialog (link button or shortcut)
    Open,
    /// Text typed into the "link text" field
    SetText(String),
    /// Text typed into the URL field
    SetUrl(String),
    /// The "open in new tab" checkbox changed
    SetNewTab(bool),
    /// A field received input focus
    FocusField(DialogField),
    /// Insert button, or Enter in the URL field
    Confirm,
    /// Cancel button, close icon, backdrop click or Escape
    Cancel,
}

/// Events on the editable surface itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMsg {
    /// Native paste carrying the clipboard's text flavor
    Paste { text: String },
    /// Text typed at the caret
    TypeText(String),
    /// The selection changed
    Select(DomRange),
    /// The surface gained focus
    Focus,
    /// The surface lost focus
    Blur,
}

/// Where a click landed, relative to this instance's elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    ColorPickerTrigger,
    ColorPicker,
    /// The dimmed area around the link dialog
    LinkDialogBackdrop,
    /// Anywhere inside the link dialog box
    LinkDialog,
    Toolbar,
    Content,
    /// Outside this editor (including other editor instances)
    Outside,
}

/// Page-level UI events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// A click anywhere in the page
    DocumentClick(ClickTarget),
    /// Hide the current notice
    DismissNotice,
}

/// Completion of asynchronous host work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardMsg {
    /// Result of a `Cmd::ReadClipboard`
    ReadCompleted(Result<String, EditorError>),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Toolbar(ToolbarMsg),
    Dialog(LinkDialogMsg),
    Content(ContentMsg),
    Ui(UiMsg),
    Clipboard(ClipboardMsg),
    /// A key pressed while focus is inside this editor
    Key(Keystroke),
}
