//! Selection tests
//!
//! Tests for selection helpers and saving/restoring across the link dialog

mod common;

use common::{click, mounted};

use rich_editor::commands::CommandId;
use rich_editor::dom::{DomPoint, DomRange};
use rich_editor::editable::SelectionManager;
use rich_editor::messages::{ContentMsg, Msg};

#[test]
fn test_select_text_across_elements() {
    let (_page, mut editor) = mounted("<p>one <strong>two</strong> three</p>");
    editor.select_text(2, 9);
    assert_eq!(editor.selected_text(), "e two t");
}

#[test]
fn test_select_text_clamps_past_end() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    editor.select_text(1, 100);
    assert_eq!(editor.selected_text(), "bc");
}

#[test]
fn test_select_all_then_type_replaces_everything() {
    let (_page, mut editor) = mounted("<p>one</p><p>two</p>");
    editor.select_all();
    editor.dispatch(Msg::Content(ContentMsg::TypeText("new".into())));
    assert_eq!(editor.get_value(), "new");
}

#[test]
fn test_set_selection_ignores_foreign_ranges() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    let text = editor.document().text_nodes()[0];
    editor.set_selection(DomRange::new(DomPoint::new(text, 0), DomPoint::new(text, 2)));
    assert_eq!(editor.selected_text(), "ab");

    editor.set_selection(DomRange::collapsed(DomPoint::new(text, 9)));
    assert_eq!(editor.selected_text(), "ab");
}

#[test]
fn test_selection_from_host_event() {
    let (_page, mut editor) = mounted("<p>hello</p>");
    let text = editor.document().text_nodes()[0];
    let range = DomRange::new(DomPoint::new(text, 5), DomPoint::new(text, 1));

    editor.dispatch(Msg::Content(ContentMsg::Select(range)));
    click(&mut editor, CommandId::Underline);

    assert_eq!(editor.get_value(), "<p>h<u>ello</u></p>");
}

#[test]
fn test_selection_lost_after_set_value() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    editor.select_all();
    editor.set_value("<p>xyz</p>");
    assert!(editor.selection().is_none());
}

#[test]
fn test_manager_restores_saved_range() {
    let (_page, editor) = mounted("<p>abcdef</p>");
    let text = editor.document().text_nodes()[0];
    let range = DomRange::new(DomPoint::new(text, 1), DomPoint::new(text, 4));

    let mut manager = SelectionManager::new();
    manager.save(editor.document(), Some(&range));
    assert!(manager.has_saved());

    assert_eq!(manager.restore(editor.document()), Some(range));
    // Restoring consumes the snapshot
    assert!(!manager.has_saved());
    assert_eq!(manager.restore(editor.document()), None);
}

#[test]
fn test_manager_fails_after_rebuild() {
    let (_page, mut editor) = mounted("<p>abc</p>");
    let text = editor.document().text_nodes()[0];
    let range = DomRange::collapsed(DomPoint::new(text, 1));

    let mut manager = SelectionManager::new();
    manager.save(editor.document(), Some(&range));
    editor.set_value("<p>abc</p>");

    assert_eq!(manager.restore(editor.document()), None);
}
