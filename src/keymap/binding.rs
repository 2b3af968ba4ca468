//! Keybinding struct mapping a keystroke to a command

use super::command::Command;
use super::context::Condition;
use super::types::Keystroke;

/// A single keybinding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
    /// Conditions that must all hold for this binding to activate
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self {
            keystroke,
            command,
            when: None,
        }
    }

    /// Add conditions to this binding (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }

    pub fn when_single(self, condition: Condition) -> Self {
        self.when(vec![condition])
    }

    pub fn is_conditional(&self) -> bool {
        self.when.as_ref().is_some_and(|c| !c.is_empty())
    }

    pub fn matches(&self, keystroke: &Keystroke) -> bool {
        self.keystroke == *keystroke
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditional_binding() {
        let stroke = Keystroke::cmd('b');
        let plain = Keybinding::new(stroke, Command::ToggleBold);
        assert!(!plain.is_conditional());
        assert!(plain.matches(&stroke));

        let guarded = plain.when_single(Condition::ContentFocused);
        assert!(guarded.is_conditional());
    }
}
