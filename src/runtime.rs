//! Runs an editor against a host: dispatches messages, carries out the
//! commands they return and feeds completions back in.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::clipboard::{default_clipboard, Clipboard};
use crate::commands::Cmd;
use crate::editor::Editor;
use crate::host::Page;
use crate::messages::{ClipboardMsg, Msg};

/// What the host should do after an event was handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Suppress the host's default action for the event
    pub prevent_default: bool,
    /// The chrome changed and should be re-rendered
    pub redraw: bool,
}

impl Dispatch {
    fn merge(&mut self, other: Dispatch) {
        self.prevent_default |= other.prevent_default;
        self.redraw |= other.redraw;
    }
}

pub struct Runtime {
    editor: Editor,
    clipboard: Box<dyn Clipboard>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl Runtime {
    /// A runtime reading the system clipboard when one is available
    pub fn new(editor: Editor) -> Self {
        Self::with_clipboard(editor, default_clipboard())
    }

    pub fn with_clipboard(editor: Editor, clipboard: Box<dyn Clipboard>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            editor,
            clipboard,
            msg_tx,
            msg_rx,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Queue for messages produced outside the event handler
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Handle one event. Completions it triggers are queued, not applied.
    pub fn dispatch(&mut self, msg: Msg) -> Dispatch {
        let cmd = self.editor.dispatch(msg);
        self.process_cmd(cmd)
    }

    /// Apply every queued message
    pub fn pump(&mut self) -> Dispatch {
        let mut outcome = Dispatch::default();
        while let Ok(msg) = self.msg_rx.try_recv() {
            outcome.merge(self.dispatch(msg));
        }
        outcome
    }

    /// Dispatch an event, apply its completions and re-render if needed
    pub fn handle(&mut self, page: &mut Page, msg: Msg) -> Dispatch {
        let mut outcome = self.dispatch(msg);
        outcome.merge(self.pump());
        if outcome.redraw {
            self.editor.render_into(page);
        }
        outcome
    }

    fn process_cmd(&mut self, cmd: Cmd) -> Dispatch {
        let mut outcome = Dispatch::default();
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => outcome.redraw = true,
            Cmd::PreventDefault => outcome.prevent_default = true,
            Cmd::ReadClipboard => {
                let result = self.clipboard.read_text();
                let _ = self
                    .msg_tx
                    .send(Msg::Clipboard(ClipboardMsg::ReadCompleted(result)));
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    outcome.merge(self.process_cmd(cmd));
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::commands::CommandId;
    use crate::config::EditorOptions;
    use crate::messages::ToolbarMsg;
    use crate::model::CLIPBOARD_DENIED_NOTICE;

    fn runtime(clipboard: MemoryClipboard) -> (Page, Runtime) {
        let mut page = Page::new().with_container("editor");
        let editor = Editor::mount(&mut page, "editor", EditorOptions::default()).unwrap();
        (page, Runtime::with_clipboard(editor, Box::new(clipboard)))
    }

    fn paste_button() -> Msg {
        Msg::Toolbar(ToolbarMsg::Command(CommandId::PastePlainText))
    }

    #[test]
    fn test_clipboard_read_is_queued_then_applied() {
        let (_page, mut runtime) = runtime(MemoryClipboard::with_text("“hi”"));
        runtime.editor_mut().set_value("<p>a</p>");
        runtime.editor_mut().select_text(1, 1);

        runtime.dispatch(paste_button());
        assert_eq!(runtime.editor().get_value(), "<p>a</p>");

        let outcome = runtime.pump();
        assert!(outcome.redraw);
        assert_eq!(runtime.editor().get_value(), "<p>a\"hi\"</p>");
    }

    #[test]
    fn test_denied_clipboard_shows_notice() {
        let (mut page, mut runtime) = runtime(MemoryClipboard::denied());
        runtime.editor_mut().set_value("<p>a</p>");

        runtime.handle(&mut page, paste_button());

        assert_eq!(runtime.editor().notice(), Some(CLIPBOARD_DENIED_NOTICE));
        assert_eq!(runtime.editor().get_value(), "<p>a</p>");
        assert!(page
            .container_html("editor")
            .unwrap()
            .contains("rich-editor-notice"));
    }

    #[cfg(feature = "system-clipboard")]
    #[test]
    fn test_default_runtime_reads_system_clipboard() {
        use crate::clipboard::SystemClipboard;

        let mut page = Page::new().with_container("editor");
        let editor = Editor::mount(&mut page, "editor", EditorOptions::default()).unwrap();
        let mut runtime = Runtime::new(editor);
        runtime.editor_mut().set_value("<p>a</p>");

        let expected = SystemClipboard.read_text();
        let outcome = runtime.handle(&mut page, paste_button());

        assert!(outcome.redraw);
        match expected {
            Err(_) => {
                assert_eq!(runtime.editor().notice(), Some(CLIPBOARD_DENIED_NOTICE));
                assert_eq!(runtime.editor().get_value(), "<p>a</p>");
            }
            Ok(_) => assert_eq!(runtime.editor().notice(), None),
        }
    }

    #[test]
    fn test_completion_after_destroy_is_dropped() {
        let (mut page, mut runtime) = runtime(MemoryClipboard::with_text("late"));
        runtime.dispatch(paste_button());
        runtime.editor_mut().destroy(&mut page);

        runtime.pump();
        assert_eq!(runtime.editor().get_value(), "");
        assert_eq!(page.container_html("editor"), Some(""));
    }
}
