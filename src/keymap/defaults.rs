//! Default keybindings for the editor
//!
//! The shipped bindings live in keymap.yaml at the crate root and are
//! embedded at compile time, with a hardcoded fallback.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};
use crate::config_paths;

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap
/// 2. User config at ~/.config/rich-editor/keymap.yaml
///
/// User bindings with `command: Unbound` remove matching default bindings.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let bindings = embedded_bindings();

    match config_paths::keymap_file() {
        Some(path) if path.exists() => load_user_keymap(bindings, &path),
        _ => bindings,
    }
}

fn embedded_bindings() -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    }
}

/// Merge a user keymap file over `base`, keeping `base` if it fails to load
pub fn load_user_keymap(base: Vec<Keybinding>, path: &Path) -> Vec<Keybinding> {
    match load_keymap_file(path) {
        Ok(user_bindings) => {
            tracing::info!(
                "Merging user keymap from {} ({} bindings)",
                path.display(),
                user_bindings.len()
            );
            merge_bindings(base, user_bindings)
        }
        Err(e) => {
            tracing::warn!("Failed to load user keymap from {}: {}", path.display(), e);
            base
        }
    }
}

/// Merge user bindings into base bindings
///
/// - Same keystroke and conditions: the user binding replaces the base one
/// - `Unbound`: removes every base binding for that keystroke
/// - Otherwise the user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        let stroke = user_binding.keystroke.normalized();

        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke.normalized() != stroke);
            continue;
        }

        let existing_idx = result
            .iter()
            .position(|b| b.keystroke.normalized() == stroke && b.when == user_binding.when);

        if let Some(idx) = existing_idx {
            result[idx] = user_binding;
        } else {
            result.push(user_binding);
        }
    }

    result
}

/// Hardcoded copy of the shipped bindings
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let none = Modifiers::NONE;

    vec![
        // Text formatting
        bind(KeyCode::Char('b'), cmd, Command::ToggleBold).when_single(Condition::ContentFocused),
        bind(KeyCode::Char('i'), cmd, Command::ToggleItalic)
            .when_single(Condition::ContentFocused),
        bind(KeyCode::Char('u'), cmd, Command::ToggleUnderline)
            .when_single(Condition::ContentFocused),
        // Links
        bind(KeyCode::Char('k'), cmd, Command::InsertLink).when_single(Condition::ContentFocused),
        // Link dialog
        bind(KeyCode::Enter, none, Command::ConfirmLinkDialog)
            .when(vec![Condition::LinkDialogOpen, Condition::UrlFieldFocused]),
        bind(KeyCode::Escape, none, Command::CancelLinkDialog)
            .when_single(Condition::LinkDialogOpen),
        // Color picker
        bind(KeyCode::Escape, none, Command::CloseColorPicker)
            .when_single(Condition::ColorPickerOpen),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
