//! Link dialog tests
//!
//! Tests for opening, confirming and cancelling the link dialog

mod common;

use common::{click, dialog, mounted, press};

use rich_editor::commands::CommandId;
use rich_editor::messages::{ClickTarget, ContentMsg, LinkDialogMsg, Msg, UiMsg};
use rich_editor::model::{DialogField, EMPTY_URL_MESSAGE};

fn open_over(editor: &mut rich_editor::Editor, start: usize, end: usize) {
    editor.select_text(start, end);
    click(editor, CommandId::InsertLink);
    assert!(editor.model().ui.link_dialog().is_some());
}

// ========================================================================
// Open / Cancel
// ========================================================================

#[test]
fn test_open_prefills_and_focuses_url() {
    let (_page, mut editor) = mounted("<p>visit the site</p>");
    open_over(&mut editor, 10, 14);

    let state = editor.model().ui.link_dialog().unwrap();
    assert_eq!(state.text, "site");
    assert_eq!(state.url, "");
    assert!(state.open_in_new_tab);
    assert!(state.error.is_none());
    assert!(editor.render().contains("value=\"site\""));
}

#[test]
fn test_open_then_cancel_leaves_value_unchanged() {
    let (_page, mut editor) = mounted("<p>visit <em>the</em> site</p>");
    let before = editor.get_value();

    open_over(&mut editor, 6, 9);
    dialog(&mut editor, LinkDialogMsg::SetUrl("https://example.com".into()));
    dialog(&mut editor, LinkDialogMsg::Cancel);

    assert!(editor.model().ui.link_dialog().is_none());
    assert_eq!(editor.get_value(), before);
}

#[test]
fn test_escape_cancels() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    open_over(&mut editor, 0, 3);

    let cmd = press(&mut editor, "Escape", false, false);

    assert!(cmd.prevents_default());
    assert!(editor.model().ui.link_dialog().is_none());
    assert_eq!(editor.get_value(), "<p>abc</p>");
}

#[test]
fn test_backdrop_click_cancels_but_box_click_does_not() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    open_over(&mut editor, 0, 3);

    editor.dispatch(Msg::Ui(UiMsg::DocumentClick(ClickTarget::LinkDialog)));
    assert!(editor.model().ui.link_dialog().is_some());

    editor.dispatch(Msg::Ui(UiMsg::DocumentClick(ClickTarget::LinkDialogBackdrop)));
    assert!(editor.model().ui.link_dialog().is_none());
    assert!(!editor.model().saved_selection.has_saved());
}

#[test]
fn test_reopen_starts_fresh() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    open_over(&mut editor, 0, 3);
    dialog(&mut editor, LinkDialogMsg::Confirm);
    assert!(editor.model().ui.link_dialog().unwrap().error.is_some());
    dialog(&mut editor, LinkDialogMsg::Cancel);

    open_over(&mut editor, 0, 1);
    let state = editor.model().ui.link_dialog().unwrap();
    assert!(state.error.is_none());
    assert_eq!(state.text, "a");
}

#[test]
fn test_surface_edits_are_ignored_while_open() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    open_over(&mut editor, 0, 3);
    let before = editor.get_value();

    let cmd = editor.dispatch(Msg::Content(ContentMsg::Paste {
        text: "pasted".into(),
    }));
    assert!(!cmd.prevents_default());
    editor.dispatch(Msg::Content(ContentMsg::TypeText("typed".into())));

    assert_eq!(editor.get_value(), before);
    assert!(editor.model().ui.link_dialog().is_some());

    // The saved selection still covers the original text
    dialog(&mut editor, LinkDialogMsg::SetUrl("https://a.b".into()));
    dialog(&mut editor, LinkDialogMsg::Confirm);
    assert_eq!(editor.get_value(), "<p><a href=\"https://a.b\">abc</a></p>");
}

// ========================================================================
// Confirm
// ========================================================================

#[test]
fn test_confirm_requires_url() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    open_over(&mut editor, 0, 3);
    dialog(&mut editor, LinkDialogMsg::SetUrl("   ".into()));
    dialog(&mut editor, LinkDialogMsg::Confirm);

    let state = editor.model().ui.link_dialog().unwrap();
    assert_eq!(state.error.as_deref(), Some(EMPTY_URL_MESSAGE));
    assert!(editor.render().contains(EMPTY_URL_MESSAGE));
    assert_eq!(editor.get_value(), "<p>abc</p>");
}

#[test]
fn test_confirm_replaces_selection_with_link() {
    let (_page, mut editor) = mounted("<p>visit the site</p>");
    open_over(&mut editor, 10, 14);
    dialog(&mut editor, LinkDialogMsg::SetUrl("https://example.com".into()));
    dialog(&mut editor, LinkDialogMsg::Confirm);

    assert!(editor.model().ui.link_dialog().is_none());
    assert_eq!(
        editor.get_value(),
        "<p>visit the <a href=\"https://example.com\">site</a></p>"
    );
    // The new-tab attributes live in the surface but are not part of the
    // sanitized value
    let live = editor.render();
    assert!(live.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
    assert!(editor.selection().unwrap().is_collapsed());
    assert!(editor.is_focused());
}

#[test]
fn test_empty_text_uses_url() {
    let (_page, mut editor) = mounted("<p>ab</p>");
    open_over(&mut editor, 1, 1);
    dialog(&mut editor, LinkDialogMsg::SetText("  ".into()));
    dialog(&mut editor, LinkDialogMsg::SetUrl("https://x.y".into()));
    dialog(&mut editor, LinkDialogMsg::SetNewTab(false));
    dialog(&mut editor, LinkDialogMsg::Confirm);

    assert_eq!(
        editor.get_value(),
        "<p>a<a href=\"https://x.y\">https://x.y</a>b</p>"
    );
    assert_eq!(editor.char_count(), 13);
}

#[test]
fn test_edited_text_is_used() {
    let (_page, mut editor) = mounted("<p>x</p>");
    open_over(&mut editor, 0, 1);
    dialog(&mut editor, LinkDialogMsg::SetText(" Docs ".into()));
    dialog(&mut editor, LinkDialogMsg::SetUrl("/docs".into()));
    dialog(&mut editor, LinkDialogMsg::SetNewTab(false));
    dialog(&mut editor, LinkDialogMsg::Confirm);

    assert_eq!(editor.get_value(), "<p><a href=\"/docs\">Docs</a></p>");
    assert!(!editor.render().contains("target="));
}

#[test]
fn test_enter_in_url_field_confirms() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    open_over(&mut editor, 0, 3);
    dialog(&mut editor, LinkDialogMsg::SetUrl("https://a.b".into()));

    let cmd = press(&mut editor, "Enter", false, false);

    assert!(cmd.prevents_default());
    assert_eq!(editor.get_value(), "<p><a href=\"https://a.b\">abc</a></p>");
}

#[test]
fn test_enter_in_text_field_does_not_confirm() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    open_over(&mut editor, 0, 3);
    dialog(&mut editor, LinkDialogMsg::SetUrl("https://a.b".into()));
    dialog(&mut editor, LinkDialogMsg::FocusField(DialogField::Text));

    press(&mut editor, "Enter", false, false);

    assert!(editor.model().ui.link_dialog().is_some());
    assert_eq!(editor.get_value(), "<p>abc</p>");
}

#[test]
fn test_content_replaced_while_open_appends_link() {
    let (_page, mut editor) = mounted("<p>old</p>");
    open_over(&mut editor, 0, 3);
    editor.set_value("<p>new</p>");
    dialog(&mut editor, LinkDialogMsg::SetUrl("https://a.b".into()));
    dialog(&mut editor, LinkDialogMsg::Confirm);

    assert_eq!(
        editor.get_value(),
        "<p>new</p><a href=\"https://a.b\">old</a>"
    );
}
