//! Page-level UI handlers: outside clicks and notices

use crate::commands::Cmd;
use crate::messages::{ClickTarget, UiMsg};
use crate::model::{EditorModel, Focus, ToolbarState};

use super::dialog::cancel_link_dialog;

pub fn update_ui(model: &mut EditorModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::DocumentClick(target) => handle_click(model, target),

        UiMsg::DismissNotice => {
            model.ui.notice.take()?;
            Some(Cmd::Redraw)
        }
    }
}

/// Clicks only close this instance's own popups
fn handle_click(model: &mut EditorModel, target: ClickTarget) -> Option<Cmd> {
    match (model.ui.toolbar_state(), target) {
        (
            ToolbarState::ColorPickerOpen,
            ClickTarget::ColorPickerTrigger | ClickTarget::ColorPicker,
        ) => None,
        (ToolbarState::ColorPickerOpen, other) => {
            model.ui.close_popup();
            if other == ClickTarget::Content {
                model.ui.focus = Focus::Content;
            }
            Some(Cmd::Redraw)
        }
        (ToolbarState::LinkDialogOpen, ClickTarget::LinkDialogBackdrop) => {
            cancel_link_dialog(model)
        }
        (ToolbarState::Idle, ClickTarget::Content) => {
            model.ui.focus = Focus::Content;
            None
        }
        _ => None,
    }
}
