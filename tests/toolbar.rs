//! Toolbar controller tests
//!
//! Tests for formatting buttons, keyboard shortcuts, the color picker and
//! paste handling

mod common;

use common::{click, ctrl, dialog, mounted, press, tags_in};

use rich_editor::commands::{Cmd, CommandId};
use rich_editor::messages::{ClickTarget, ContentMsg, LinkDialogMsg, Msg, ToolbarMsg, UiMsg};
use rich_editor::model::ToolbarState;
use rich_editor::sanitize::{clean_html, ALLOWED_TAGS};

// ========================================================================
// Formatting Buttons
// ========================================================================

#[test]
fn test_bold_button_wraps_selection() {
    let (_page, mut editor) = mounted("<p>hello world</p>");
    editor.select_text(6, 11);

    let cmd = click(&mut editor, CommandId::Bold);

    assert!(cmd.needs_redraw());
    assert_eq!(editor.get_value(), "<p>hello <strong>world</strong></p>");
    assert!(editor.is_focused());
}

#[test]
fn test_bold_button_twice_restores_text() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    editor.select_text(0, 3);
    click(&mut editor, CommandId::Bold);
    editor.select_text(0, 3);
    click(&mut editor, CommandId::Bold);
    assert_eq!(editor.get_value(), "<p>abc</p>");
}

#[test]
fn test_button_without_selection_only_focuses() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    click(&mut editor, CommandId::Italic);
    assert_eq!(editor.get_value(), "<p>abc</p>");
    assert!(editor.is_focused());
}

#[test]
fn test_list_button_converts_paragraph() {
    let (_page, mut editor) = mounted("<p>one</p><p>two</p>");
    editor.select_text(4, 4);
    click(&mut editor, CommandId::UnorderedList);
    assert_eq!(editor.get_value(), "<p>one</p><ul><li>two</li></ul>");
}

#[test]
fn test_formatting_sequences_stay_allow_listed() {
    let (_page, mut editor) = mounted("<p>one two three</p><p>four</p>");
    let steps = [
        (0, 3, CommandId::Bold),
        (4, 7, CommandId::Italic),
        (8, 13, CommandId::Underline),
        (0, 7, CommandId::AlignCenter),
        (2, 10, CommandId::OrderedList),
        (0, 17, CommandId::Justify),
        (5, 9, CommandId::UnorderedList),
        (0, 17, CommandId::Unlink),
        (1, 16, CommandId::AlignRight),
    ];

    for (start, end, id) in steps {
        editor.select_text(start, end);
        click(&mut editor, id);

        let value = editor.get_value();
        for tag in tags_in(&value) {
            assert!(
                ALLOWED_TAGS.contains(&tag.as_str()),
                "<{tag}> after {id:?}: {value}"
            );
        }
        assert_eq!(clean_html(&value), value);
    }
    assert_eq!(editor.get_plain_text().replace('\n', ""), "one two threefour");
}

// ========================================================================
// Keyboard Shortcuts
// ========================================================================

#[test]
fn test_ctrl_b_bolds_and_prevents_default() {
    let (_page, mut editor) = mounted("<p>hello</p>");
    editor.focus();
    editor.select_text(0, 5);

    let cmd = ctrl(&mut editor, 'b');

    assert!(cmd.prevents_default());
    assert_eq!(editor.get_value(), "<p><strong>hello</strong></p>");
}

#[test]
fn test_cmd_modifier_matches_like_ctrl() {
    let (_page, mut editor) = mounted("<p>hello</p>");
    editor.focus();
    editor.select_text(0, 5);

    let cmd = press(&mut editor, "i", false, true);

    assert!(cmd.prevents_default());
    assert_eq!(editor.get_value(), "<p><em>hello</em></p>");
}

#[test]
fn test_ctrl_u_underlines() {
    let (_page, mut editor) = mounted("<p>hello</p>");
    editor.focus();
    editor.select_text(0, 5);
    ctrl(&mut editor, 'u');
    assert_eq!(editor.get_value(), "<p><u>hello</u></p>");
}

#[test]
fn test_shortcuts_need_content_focus() {
    let (_page, mut editor) = mounted("<p>hello</p>");
    editor.select_text(0, 5);

    let cmd = ctrl(&mut editor, 'b');

    assert_eq!(cmd, Cmd::None);
    assert_eq!(editor.get_value(), "<p>hello</p>");
}

#[test]
fn test_unbound_key_is_left_to_host() {
    let (_page, mut editor) = mounted("<p>hello</p>");
    editor.focus();
    assert_eq!(ctrl(&mut editor, 'q'), Cmd::None);
}

#[test]
fn test_ctrl_k_opens_link_dialog() {
    let (_page, mut editor) = mounted("<p>read the docs</p>");
    editor.focus();
    editor.select_text(9, 13);

    let cmd = ctrl(&mut editor, 'k');

    assert!(cmd.prevents_default());
    let state = editor.model().ui.link_dialog().unwrap();
    assert_eq!(state.text, "docs");
    assert_eq!(editor.model().ui.toolbar_state(), ToolbarState::LinkDialogOpen);
}

#[test]
fn test_toolbar_is_ignored_while_dialog_open() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    editor.select_text(0, 3);
    click(&mut editor, CommandId::InsertLink);

    assert_eq!(click(&mut editor, CommandId::Bold), Cmd::None);
    dialog(&mut editor, LinkDialogMsg::Cancel);
    assert_eq!(editor.get_value(), "<p>abc</p>");
}

// ========================================================================
// Color Picker
// ========================================================================

#[test]
fn test_color_picker_applies_swatch() {
    let (_page, mut editor) = mounted("<p>teal</p>");
    editor.select_text(0, 4);

    editor.dispatch(Msg::Toolbar(ToolbarMsg::ToggleColorPicker));
    assert!(editor.render().contains("rich-editor-color-picker\" style=\"display: flex;\""));
    editor.dispatch(Msg::Toolbar(ToolbarMsg::PickColor(1)));

    assert_eq!(
        editor.get_value(),
        "<p><span style=\"color: #00b2bb;\">teal</span></p>"
    );
    assert_eq!(editor.model().ui.toolbar_state(), ToolbarState::Idle);
}

#[test]
fn test_outside_click_closes_color_picker() {
    let (_page, mut editor) = mounted("<p>x</p>");
    editor.dispatch(Msg::Toolbar(ToolbarMsg::ToggleColorPicker));

    editor.dispatch(Msg::Ui(UiMsg::DocumentClick(ClickTarget::ColorPickerTrigger)));
    assert!(editor.model().ui.is_color_picker_open());

    editor.dispatch(Msg::Ui(UiMsg::DocumentClick(ClickTarget::Outside)));
    assert!(!editor.model().ui.is_color_picker_open());
}

#[test]
fn test_escape_closes_color_picker() {
    let (_page, mut editor) = mounted("<p>x</p>");
    editor.dispatch(Msg::Toolbar(ToolbarMsg::ToggleColorPicker));

    let cmd = press(&mut editor, "Escape", false, false);

    assert!(cmd.prevents_default());
    assert_eq!(editor.model().ui.toolbar_state(), ToolbarState::Idle);
}

// ========================================================================
// Paste
// ========================================================================

#[test]
fn test_native_paste_inserts_clean_text() {
    let (_page, mut editor) = mounted("<p>ab</p>");
    editor.select_text(1, 1);

    let cmd = editor.dispatch(Msg::Content(ContentMsg::Paste {
        text: "<i>“quoted”</i>   text".into(),
    }));

    assert!(cmd.prevents_default());
    assert_eq!(editor.get_value(), "<p>a\"quoted\" textb</p>");
    assert_eq!(editor.char_count(), 15);
}

#[test]
fn test_paste_keeps_line_breaks() {
    let (_page, mut editor) = mounted("");
    editor.dispatch(Msg::Content(ContentMsg::Paste {
        text: "one\n\n\n\ntwo".into(),
    }));
    assert_eq!(editor.get_value(), "one<br><br>two");
}

#[test]
fn test_paste_button_asks_host_for_clipboard() {
    let (_page, mut editor) = mounted("");
    assert!(click(&mut editor, CommandId::PastePlainText).reads_clipboard());
}
