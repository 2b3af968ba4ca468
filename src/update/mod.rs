//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod content;
mod dialog;
mod toolbar;
mod ui;

use crate::commands::Cmd;
use crate::dom::DomRange;
use crate::format::{self, FormatCommand};
use crate::keymap::Keystroke;
use crate::messages::Msg;
use crate::model::{EditorModel, Focus};

#[cfg(debug_assertions)]
use crate::tracing::DocumentSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use content::{update_clipboard, update_content};
pub use dialog::{cancel_link_dialog, open_link_dialog, update_dialog};
pub use toolbar::update_toolbar;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    if model.destroyed {
        tracing::debug!(target: "message", "editor destroyed, ignoring message");
        return None;
    }

    match msg {
        Msg::Toolbar(m) => toolbar::update_toolbar(model, m),
        Msg::Dialog(m) => dialog::update_dialog(model, m),
        Msg::Content(m) => content::update_content(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::Clipboard(m) => content::update_clipboard(model, m),
        Msg::Key(keystroke) => update_key(model, keystroke),
    }
}

/// Resolve a keystroke through the keymap. Bound keys suppress the host's
/// default handling; unbound keys are left alone.
fn update_key(model: &mut EditorModel, keystroke: Keystroke) -> Option<Cmd> {
    if model.is_inert() {
        return None;
    }

    let context = model.key_context();
    let command = model
        .keymap
        .lookup_with_context(&keystroke, Some(&context))?;
    tracing::debug!(target: "keymap", %keystroke, ?command, "key bound");

    let mut cmds = vec![Cmd::PreventDefault];
    for msg in command.to_msgs() {
        cmds.extend(update_inner(model, msg));
    }
    Some(Cmd::batch(cmds))
}

/// Apply a formatting command, then move the selection and focus back to
/// the surface and recount
pub(crate) fn apply_format(model: &mut EditorModel, range: &DomRange, command: &FormatCommand) {
    let after = format::apply(&mut model.document, range, command);
    model.selection = Some(after);
    model.ui.focus = Focus::Content;
    model.recount();
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = DocumentSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = DocumentSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "state", %diff, "state changed");
    }

    debug_assert!(
        !after.has_saved_selection || model.ui.link_dialog().is_some(),
        "saved selection outlived the link dialog after {}",
        msg_name
    );

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Toolbar::Command(Bold)`
/// - `Dialog::SetUrl("https://…")`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Toolbar(m) => format!("Toolbar::{:?}", m),
        Msg::Dialog(m) => format!("Dialog::{:?}", m),
        Msg::Content(m) => format!("Content::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::Clipboard(m) => format!("Clipboard::{:?}", m),
        Msg::Key(k) => format!("Key({})", k),
    }
}
