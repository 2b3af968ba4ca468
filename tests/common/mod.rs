//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use rich_editor::commands::{Cmd, CommandId};
use rich_editor::config::EditorOptions;
use rich_editor::host::Page;
use rich_editor::keymap::Keystroke;
use rich_editor::messages::{LinkDialogMsg, Msg, ToolbarMsg};
use rich_editor::Editor;

pub const CONTAINER: &str = "editor";

/// Mount an editor with default options and the given content
pub fn mounted(html: &str) -> (Page, Editor) {
    mounted_with(html, EditorOptions::default())
}

pub fn mounted_with(html: &str, options: EditorOptions) -> (Page, Editor) {
    let mut page = Page::new().with_container(CONTAINER);
    let mut editor = Editor::mount(&mut page, &format!("#{}", CONTAINER), options)
        .expect("container exists");
    editor.set_value(html);
    (page, editor)
}

/// Click a toolbar button
pub fn click(editor: &mut Editor, id: CommandId) -> Cmd {
    editor.dispatch(Msg::Toolbar(ToolbarMsg::Command(id)))
}

/// Press a key with Ctrl held, e.g. `ctrl(editor, 'b')`
pub fn ctrl(editor: &mut Editor, c: char) -> Cmd {
    press(editor, &c.to_string(), true, false)
}

/// Press a key by its DOM key name
pub fn press(editor: &mut Editor, key: &str, ctrl: bool, meta: bool) -> Cmd {
    let keystroke = Keystroke::from_event(key, ctrl, false, false, meta).expect("known key");
    editor.dispatch(Msg::Key(keystroke))
}

pub fn dialog(editor: &mut Editor, msg: LinkDialogMsg) -> Cmd {
    editor.dispatch(Msg::Dialog(msg))
}

/// Tags used in a serialized fragment, lowercase and deduplicated
pub fn tags_in(html: &str) -> Vec<String> {
    let mut tags: Vec<String> = html
        .split('<')
        .skip(1)
        .filter_map(|chunk| {
            let chunk = chunk.trim_start_matches('/');
            let name: String = chunk
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect();
            (!name.is_empty()).then(|| name.to_ascii_lowercase())
        })
        .collect();
    tags.sort();
    tags.dedup();
    tags
}
