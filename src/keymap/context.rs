//! Context system for conditional keybindings
//!
//! Lets one key mean different things depending on where focus is, such as
//! Enter confirming the link dialog only while the URL field is focused.

use serde::Deserialize;

/// Editor state relevant to keybinding evaluation
#[derive(Debug, Clone, Default)]
pub struct KeyContext {
    /// Whether the selection covers at least one character
    pub has_selection: bool,
    /// Whether the editable surface has focus
    pub content_focused: bool,
    pub link_dialog_open: bool,
    pub color_picker_open: bool,
    /// Whether the link dialog's URL field has focus
    pub url_field_focused: bool,
}

impl KeyContext {
    /// Focus on the editable surface, no popup open
    pub fn content_default() -> Self {
        Self {
            content_focused: true,
            ..Self::default()
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    HasSelection,
    NoSelection,
    ContentFocused,
    LinkDialogOpen,
    LinkDialogClosed,
    ColorPickerOpen,
    UrlFieldFocused,
}

impl Condition {
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::HasSelection => ctx.has_selection,
            Condition::NoSelection => !ctx.has_selection,
            Condition::ContentFocused => ctx.content_focused,
            Condition::LinkDialogOpen => ctx.link_dialog_open,
            Condition::LinkDialogClosed => !ctx.link_dialog_open,
            Condition::ColorPickerOpen => ctx.color_picker_open,
            Condition::UrlFieldFocused => ctx.url_field_focused,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_has_selection() {
        let mut ctx = KeyContext::default();
        assert!(!Condition::HasSelection.evaluate(&ctx));
        assert!(Condition::NoSelection.evaluate(&ctx));

        ctx.has_selection = true;
        assert!(Condition::HasSelection.evaluate(&ctx));
        assert!(!Condition::NoSelection.evaluate(&ctx));
    }

    #[test]
    fn test_condition_dialog() {
        let ctx = KeyContext {
            link_dialog_open: true,
            url_field_focused: true,
            ..KeyContext::default()
        };
        assert!(Condition::LinkDialogOpen.evaluate(&ctx));
        assert!(!Condition::LinkDialogClosed.evaluate(&ctx));
        assert!(Condition::UrlFieldFocused.evaluate(&ctx));
        assert!(!Condition::ContentFocused.evaluate(&ctx));
    }

    #[test]
    fn test_evaluate_all_and_logic() {
        let mut ctx = KeyContext::content_default();
        ctx.has_selection = true;

        assert!(Condition::evaluate_all(&[], &ctx));
        assert!(Condition::evaluate_all(
            &[Condition::HasSelection, Condition::ContentFocused],
            &ctx
        ));
        assert!(!Condition::evaluate_all(
            &[Condition::HasSelection, Condition::LinkDialogOpen],
            &ctx
        ));
    }
}
