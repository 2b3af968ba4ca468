//! Handlers for the editable surface: paste, typing, selection, focus and
//! clipboard completions

use crate::commands::Cmd;
use crate::format::FormatCommand;
use crate::messages::{ClipboardMsg, ContentMsg};
use crate::model::{EditorModel, Focus, CLIPBOARD_DENIED_NOTICE};
use crate::sanitize::clean_pasted_text;

use super::apply_format;

pub fn update_content(model: &mut EditorModel, msg: ContentMsg) -> Option<Cmd> {
    match msg {
        // Pasting is always plain text
        ContentMsg::Paste { text } => {
            if model.is_inert() || model.ui.link_dialog().is_some() {
                return None;
            }
            insert_text(model, &clean_pasted_text(&text));
            Some(Cmd::batch([Cmd::PreventDefault, Cmd::Redraw]))
        }

        ContentMsg::TypeText(text) => {
            if model.is_inert() || model.ui.link_dialog().is_some() {
                return None;
            }
            insert_text(model, &text);
            Some(Cmd::Redraw)
        }

        ContentMsg::Select(range) => {
            if model.document.range_is_valid(&range) {
                model.selection = Some(range);
            } else {
                tracing::debug!(?range, "ignoring selection outside the surface");
            }
            None
        }

        ContentMsg::Focus => {
            model.ui.focus = Focus::Content;
            None
        }

        ContentMsg::Blur => {
            if model.ui.focus == Focus::Content {
                model.ui.focus = Focus::None;
            }
            None
        }
    }
}

/// Result of the plain-paste button's clipboard read
pub fn update_clipboard(model: &mut EditorModel, msg: ClipboardMsg) -> Option<Cmd> {
    match msg {
        ClipboardMsg::ReadCompleted(result) => {
            if model.is_inert() {
                tracing::debug!("dropping clipboard result for inert editor");
                return None;
            }
            match result {
                Ok(text) => {
                    insert_text(model, &clean_pasted_text(&text));
                    Some(Cmd::Redraw)
                }
                Err(err) => {
                    tracing::warn!(%err, "clipboard read failed");
                    model.ui.set_notice(CLIPBOARD_DENIED_NOTICE);
                    Some(Cmd::Redraw)
                }
            }
        }
    }
}

/// Replace the selection (or append at the end) with plain text
fn insert_text(model: &mut EditorModel, text: &str) {
    let range = model.range_or_end();
    apply_format(model, &range, &FormatCommand::InsertPlainText(text.to_string()));
}
