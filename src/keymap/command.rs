//! Command enum representing the editor actions that can be bound to keys
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to one or more `Msg` values for the update loop.

use std::str::FromStr;

use crate::commands::CommandId;
use crate::messages::{LinkDialogMsg, Msg, ToolbarMsg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Text formatting
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,

    // Lists and alignment
    BulletList,
    NumberedList,
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignJustify,

    // Links
    /// Open the link dialog
    InsertLink,
    RemoveLink,

    // Clipboard
    PastePlainText,

    // Popups
    ConfirmLinkDialog,
    CancelLinkDialog,
    CloseColorPicker,

    /// Removes a default binding in a user keymap
    Unbound,
}

impl Command {
    /// Convert this command to message(s) for the update loop
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        let toolbar = |id| vec![Msg::Toolbar(ToolbarMsg::Command(id))];
        match self {
            ToggleBold => toolbar(CommandId::Bold),
            ToggleItalic => toolbar(CommandId::Italic),
            ToggleUnderline => toolbar(CommandId::Underline),
            BulletList => toolbar(CommandId::UnorderedList),
            NumberedList => toolbar(CommandId::OrderedList),
            AlignLeft => toolbar(CommandId::AlignLeft),
            AlignCenter => toolbar(CommandId::AlignCenter),
            AlignRight => toolbar(CommandId::AlignRight),
            AlignJustify => toolbar(CommandId::Justify),
            InsertLink => toolbar(CommandId::InsertLink),
            RemoveLink => toolbar(CommandId::Unlink),
            PastePlainText => toolbar(CommandId::PastePlainText),
            ConfirmLinkDialog => vec![Msg::Dialog(LinkDialogMsg::Confirm)],
            CancelLinkDialog => vec![Msg::Dialog(LinkDialogMsg::Cancel)],
            CloseColorPicker => vec![Msg::Toolbar(ToolbarMsg::CloseColorPicker)],
            Unbound => vec![],
        }
    }

    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            ToggleBold => "Gras",
            ToggleItalic => "Italique",
            ToggleUnderline => "Souligné",
            BulletList => "Liste à puces",
            NumberedList => "Liste numérotée",
            AlignLeft => "Aligner à gauche",
            AlignCenter => "Centrer",
            AlignRight => "Aligner à droite",
            AlignJustify => "Justifier",
            InsertLink => "Insérer un lien",
            RemoveLink => "Supprimer le lien",
            PastePlainText => "Coller texte brut",
            ConfirmLinkDialog => "Insérer",
            CancelLinkDialog => "Annuler",
            CloseColorPicker => "Fermer",
            Unbound => "",
        }
    }
}

// Parses the command names used in keymap YAML
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ToggleBold" => Ok(Command::ToggleBold),
            "ToggleItalic" => Ok(Command::ToggleItalic),
            "ToggleUnderline" => Ok(Command::ToggleUnderline),
            "BulletList" => Ok(Command::BulletList),
            "NumberedList" => Ok(Command::NumberedList),
            "AlignLeft" => Ok(Command::AlignLeft),
            "AlignCenter" => Ok(Command::AlignCenter),
            "AlignRight" => Ok(Command::AlignRight),
            "AlignJustify" => Ok(Command::AlignJustify),
            "InsertLink" => Ok(Command::InsertLink),
            "RemoveLink" => Ok(Command::RemoveLink),
            "PastePlainText" => Ok(Command::PastePlainText),
            "ConfirmLinkDialog" => Ok(Command::ConfirmLinkDialog),
            "CancelLinkDialog" => Ok(Command::CancelLinkDialog),
            "CloseColorPicker" => Ok(Command::CloseColorPicker),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_commands_go_through_toolbar() {
        assert_eq!(
            Command::ToggleBold.to_msgs(),
            vec![Msg::Toolbar(ToolbarMsg::Command(CommandId::Bold))]
        );
        assert_eq!(
            Command::InsertLink.to_msgs(),
            vec![Msg::Toolbar(ToolbarMsg::Command(CommandId::InsertLink))]
        );
    }

    #[test]
    fn test_command_unbound_empty() {
        assert!(Command::Unbound.to_msgs().is_empty());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Command::from_str("ToggleBold"), Ok(Command::ToggleBold));
        assert_eq!(
            Command::from_str("CancelLinkDialog"),
            Ok(Command::CancelLinkDialog)
        );
        assert!(Command::from_str("SaveFile").is_err());
    }
}
