//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use crate::format::{FormatCommand, ListKind};
use crate::sanitize::TextAlign;

// ============================================================================
// Toolbar Registry
// ============================================================================

/// Identifies a toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // Text formatting
    Bold,
    Italic,
    Underline,

    // Lists
    UnorderedList,
    OrderedList,

    // Alignment
    AlignLeft,
    AlignCenter,
    AlignRight,
    Justify,

    // Links
    InsertLink,
    Unlink,

    // Clipboard
    PastePlainText,
}

impl CommandId {
    /// The formatting operation a button applies directly, if any
    pub fn format_command(self) -> Option<FormatCommand> {
        match self {
            CommandId::Bold => Some(FormatCommand::ToggleBold),
            CommandId::Italic => Some(FormatCommand::ToggleItalic),
            CommandId::Underline => Some(FormatCommand::ToggleUnderline),
            CommandId::UnorderedList => Some(FormatCommand::List(ListKind::Unordered)),
            CommandId::OrderedList => Some(FormatCommand::List(ListKind::Ordered)),
            CommandId::AlignLeft => Some(FormatCommand::Align(TextAlign::Left)),
            CommandId::AlignCenter => Some(FormatCommand::Align(TextAlign::Center)),
            CommandId::AlignRight => Some(FormatCommand::Align(TextAlign::Right)),
            CommandId::Justify => Some(FormatCommand::Align(TextAlign::Justify)),
            CommandId::Unlink => Some(FormatCommand::RemoveLink),
            CommandId::InsertLink | CommandId::PastePlainText => None,
        }
    }

    /// Name used for `data-command` in the rendered toolbar
    pub fn name(self) -> &'static str {
        match self {
            CommandId::Bold => "bold",
            CommandId::Italic => "italic",
            CommandId::Underline => "underline",
            CommandId::UnorderedList => "insertUnorderedList",
            CommandId::OrderedList => "insertOrderedList",
            CommandId::AlignLeft => "justifyLeft",
            CommandId::AlignCenter => "justifyCenter",
            CommandId::AlignRight => "justifyRight",
            CommandId::Justify => "justifyFull",
            CommandId::InsertLink => "createLink",
            CommandId::Unlink => "unlink",
            CommandId::PastePlainText => "paste",
        }
    }
}

/// A toolbar button definition
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    /// Button face
    pub label: &'static str,
    /// Tooltip
    pub title: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Toolbar buttons grouped the way they are rendered
pub static TOOLBAR_GROUPS: &[&[CommandDef]] = &[
    &[
        CommandDef {
            id: CommandId::Bold,
            label: "B",
            title: "Gras (Ctrl+B)",
            keybinding: Some("cmd+b"),
        },
        CommandDef {
            id: CommandId::Italic,
            label: "I",
            title: "Italique (Ctrl+I)",
            keybinding: Some("cmd+i"),
        },
        CommandDef {
            id: CommandId::Underline,
            label: "U",
            title: "Souligné (Ctrl+U)",
            keybinding: Some("cmd+u"),
        },
    ],
    &[
        CommandDef {
            id: CommandId::UnorderedList,
            label: "• Liste",
            title: "Liste à puces",
            keybinding: None,
        },
        CommandDef {
            id: CommandId::OrderedList,
            label: "1. Liste",
            title: "Liste numérotée",
            keybinding: None,
        },
    ],
    &[
        CommandDef {
            id: CommandId::AlignLeft,
            label: "⬅",
            title: "Aligner à gauche",
            keybinding: None,
        },
        CommandDef {
            id: CommandId::AlignCenter,
            label: "↔",
            title: "Centrer",
            keybinding: None,
        },
        CommandDef {
            id: CommandId::AlignRight,
            label: "➡",
            title: "Aligner à droite",
            keybinding: None,
        },
        CommandDef {
            id: CommandId::Justify,
            label: "⬌",
            title: "Justifier",
            keybinding: None,
        },
    ],
    &[
        CommandDef {
            id: CommandId::InsertLink,
            label: "🔗 Lien",
            title: "Insérer un lien (Ctrl+K)",
            keybinding: Some("cmd+k"),
        },
        CommandDef {
            id: CommandId::Unlink,
            label: "🔗✗",
            title: "Supprimer le lien",
            keybinding: None,
        },
    ],
    &[CommandDef {
        id: CommandId::PastePlainText,
        label: "📋 Coller",
        title: "Coller texte brut",
        keybinding: None,
    }],
];

/// Every toolbar command, in display order
pub fn all_commands() -> impl Iterator<Item = &'static CommandDef> {
    TOOLBAR_GROUPS.iter().flat_map(|group| group.iter())
}

/// Look up a command definition
pub fn command_def(id: CommandId) -> Option<&'static CommandDef> {
    all_commands().find(|def| def.id == id)
}

// ============================================================================
// Side Effects
// ============================================================================

/// Side effects requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// The rendered chrome changed
    Redraw,
    /// Suppress the host's default handling of the triggering event
    PreventDefault,
    /// Read text from the clipboard, then send
    /// `Msg::Clipboard(ClipboardMsg::ReadCompleted(..))`
    ReadClipboard,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, dropping `None`s and flattening single entries
    pub fn batch(cmds: impl IntoIterator<Item = Cmd>) -> Cmd {
        let mut flat: Vec<Cmd> = Vec::new();
        for cmd in cmds {
            match cmd {
                Cmd::None => {}
                Cmd::Batch(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Cmd::None,
            1 => flat.remove(0),
            _ => Cmd::Batch(flat),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// True if this command or any batched command satisfies `pred`
    fn any(&self, pred: &impl Fn(&Cmd) -> bool) -> bool {
        match self {
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.any(pred)),
            other => pred(other),
        }
    }

    pub fn prevents_default(&self) -> bool {
        self.any(&|c| matches!(c, Cmd::PreventDefault))
    }

    pub fn needs_redraw(&self) -> bool {
        self.any(&|c| matches!(c, Cmd::Redraw))
    }

    pub fn reads_clipboard(&self) -> bool {
        self.any(&|c| matches!(c, Cmd::ReadClipboard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flattens() {
        let cmd = Cmd::batch([
            Cmd::None,
            Cmd::Batch(vec![Cmd::Redraw, Cmd::PreventDefault]),
            Cmd::ReadClipboard,
        ]);
        assert_eq!(
            cmd,
            Cmd::Batch(vec![Cmd::Redraw, Cmd::PreventDefault, Cmd::ReadClipboard])
        );
        assert!(cmd.prevents_default());
    }

    #[test]
    fn test_batch_single_and_empty() {
        assert_eq!(Cmd::batch([Cmd::None, Cmd::Redraw]), Cmd::Redraw);
        assert!(Cmd::batch([Cmd::None]).is_none());
    }

    #[test]
    fn test_registry_lookup() {
        let def = command_def(CommandId::InsertLink).unwrap();
        assert_eq!(def.keybinding, Some("cmd+k"));
        assert_eq!(all_commands().count(), 12);
    }
}
