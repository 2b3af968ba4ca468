//! Link dialog message handlers

use crate::commands::Cmd;
use crate::dom::DomRange;
use crate::format::FormatCommand;
use crate::messages::LinkDialogMsg;
use crate::model::{DialogField, EditorModel, Focus, LinkDialogState, PopupState};

use super::apply_format;

pub fn update_dialog(model: &mut EditorModel, msg: LinkDialogMsg) -> Option<Cmd> {
    match msg {
        LinkDialogMsg::Open => open_link_dialog(model),

        LinkDialogMsg::SetText(text) => {
            model.ui.link_dialog_mut()?.text = text;
            Some(Cmd::Redraw)
        }

        LinkDialogMsg::SetUrl(url) => {
            model.ui.link_dialog_mut()?.url = url;
            Some(Cmd::Redraw)
        }

        LinkDialogMsg::SetNewTab(checked) => {
            model.ui.link_dialog_mut()?.open_in_new_tab = checked;
            Some(Cmd::Redraw)
        }

        LinkDialogMsg::FocusField(field) => {
            model.ui.link_dialog_mut()?.focused = Some(field);
            model.ui.focus = Focus::Dialog(field);
            None
        }

        LinkDialogMsg::Confirm => confirm_link_dialog(model),

        LinkDialogMsg::Cancel => cancel_link_dialog(model),
    }
}

/// Save the selection and show the dialog pre-filled with its text
pub fn open_link_dialog(model: &mut EditorModel) -> Option<Cmd> {
    if model.is_inert() || model.ui.link_dialog().is_some() {
        return None;
    }

    let current = model.current_range();
    model.saved_selection.save(&model.document, current.as_ref());

    let selected_text = current
        .map(|range| model.document.range_text(&range))
        .unwrap_or_default();
    model
        .ui
        .open_popup(PopupState::LinkDialog(LinkDialogState::new(selected_text)));
    model.ui.focus = Focus::Dialog(DialogField::Url);

    tracing::debug!(
        saved = model.saved_selection.has_saved(),
        "link dialog opened"
    );
    Some(Cmd::Redraw)
}

/// Hide the dialog without touching the content
pub fn cancel_link_dialog(model: &mut EditorModel) -> Option<Cmd> {
    model.ui.link_dialog()?;
    model.ui.close_popup();
    model.saved_selection.discard();
    model.ui.focus = Focus::None;
    Some(Cmd::Redraw)
}

fn confirm_link_dialog(model: &mut EditorModel) -> Option<Cmd> {
    let dialog = model.ui.link_dialog_mut()?;
    let Some(request) = dialog.submit() else {
        tracing::debug!("link dialog confirmed without URL");
        return Some(Cmd::Redraw);
    };

    let range = match model.saved_selection.restore(&model.document) {
        Some(range) => range,
        None => {
            tracing::debug!("saved selection unavailable, appending link");
            DomRange::collapsed(model.document.end_point())
        }
    };

    model.ui.close_popup();
    apply_format(model, &range, &FormatCommand::CreateLink(request));
    Some(Cmd::Redraw)
}
