//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings` by normalized keystroke. Several bindings can
    /// share a keystroke with different conditions.
    single_lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            single_lookup: HashMap::new(),
        }
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.single_lookup
            .entry(binding.keystroke.normalized())
            .or_default()
            .push(idx);
        self.bindings.push(binding);
    }

    /// Look up a keystroke, ignoring conditional bindings
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup_with_context(keystroke, None)
    }

    /// Look up a keystroke with context for conditional bindings
    ///
    /// Bindings with conditions are checked before unconditional ones; the
    /// first match wins. Ctrl and Cmd are interchangeable.
    pub fn lookup_with_context(
        &self,
        keystroke: &Keystroke,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        let indices = self.single_lookup.get(&keystroke.normalized())?;
        self.find_matching_binding(indices, context)
    }

    fn find_matching_binding(
        &self,
        indices: &[usize],
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        // First pass: bindings with conditions that match
        for &idx in indices {
            let binding = &self.bindings[idx];
            if let (Some(conditions), Some(ctx)) = (&binding.when, context) {
                if Condition::evaluate_all(conditions, ctx) {
                    return Some(binding.command);
                }
            }
        }

        // Second pass: unconditional bindings
        indices
            .iter()
            .map(|&idx| &self.bindings[idx])
            .find(|binding| binding.when.is_none())
            .map(|binding| binding.command)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// The first binding for a command
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == command)
    }

    /// Display string for a command's keybinding, e.g. "Ctrl+B"
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.keystroke.to_string())
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
