//! Toolbar message handlers: formatting buttons and the color picker

use crate::commands::{Cmd, CommandId};
use crate::format::FormatCommand;
use crate::messages::ToolbarMsg;
use crate::model::{EditorModel, Focus, PopupState, ToolbarState};

use super::{apply_format, dialog};

pub fn update_toolbar(model: &mut EditorModel, msg: ToolbarMsg) -> Option<Cmd> {
    if model.is_inert() {
        return None;
    }

    match msg {
        ToolbarMsg::Command(id) => run_command(model, id),

        ToolbarMsg::ToggleColorPicker => {
            match model.ui.toolbar_state() {
                ToolbarState::Idle => model.ui.open_popup(PopupState::ColorPicker),
                ToolbarState::ColorPickerOpen => model.ui.close_popup(),
                ToolbarState::LinkDialogOpen => return None,
            }
            Some(Cmd::Redraw)
        }

        ToolbarMsg::PickColor(index) => {
            if !model.ui.is_color_picker_open() {
                return None;
            }
            let Some(swatch) = model.config.swatch(index).cloned() else {
                tracing::warn!(index, "no color swatch at index");
                return None;
            };
            model.ui.close_popup();

            let command = if swatch.is_reset() {
                FormatCommand::ClearFormatting
            } else {
                FormatCommand::SetForegroundColor(swatch.value)
            };
            match model.current_range() {
                Some(range) => apply_format(model, &range, &command),
                None => model.ui.focus = Focus::Content,
            }
            Some(Cmd::Redraw)
        }

        ToolbarMsg::CloseColorPicker => {
            if !model.ui.is_color_picker_open() {
                return None;
            }
            model.ui.close_popup();
            Some(Cmd::Redraw)
        }
    }
}

fn run_command(model: &mut EditorModel, id: CommandId) -> Option<Cmd> {
    if model.ui.toolbar_state() == ToolbarState::LinkDialogOpen {
        return None;
    }

    match id {
        CommandId::InsertLink => dialog::open_link_dialog(model),
        CommandId::PastePlainText => Some(Cmd::ReadClipboard),
        other => {
            let command = other.format_command()?;
            match model.current_range() {
                Some(range) => apply_format(model, &range, &command),
                None => {
                    tracing::debug!(?command, "no selection in the surface");
                    model.ui.focus = Focus::Content;
                }
            }
            Some(Cmd::Redraw)
        }
    }
}
