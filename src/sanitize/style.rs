//! Inline `style` attribute parsing, reduced to the declarations the editor
//! keeps (`color` and `text-align`).

use std::fmt;

/// Horizontal alignment accepted in `text-align`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
    Start,
    End,
}

impl TextAlign {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of an inline style the editor understands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub color: Option<String>,
    pub text_align: Option<TextAlign>,
}

impl InlineStyle {
    /// Parse a `style` attribute value. Unknown properties and unsafe values
    /// are ignored; for repeated properties the last one wins.
    pub fn parse(style: &str) -> Self {
        let mut out = Self::default();
        for declaration in style.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let value = strip_important(value.trim());
            if value.is_empty() || !is_safe_value(value) {
                continue;
            }
            match name.trim().to_ascii_lowercase().as_str() {
                "color" => out.color = Some(value.to_string()),
                "text-align" => {
                    if let Some(align) = TextAlign::parse(value) {
                        out.text_align = Some(align);
                    }
                }
                _ => {}
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.text_align.is_none()
    }

    /// Serialize as `color: X; text-align: Y;`, omitting absent parts
    pub fn to_css(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(color) = &self.color {
            parts.push(format!("color: {color};"));
        }
        if let Some(align) = self.text_align {
            parts.push(format!("text-align: {align};"));
        }
        parts.join(" ")
    }
}

/// A color value fit for a `color` or `background` declaration, or `None`
/// if it could carry anything else
pub fn safe_color(value: &str) -> Option<&str> {
    let value = value.trim();
    let valid = !value.is_empty()
        && is_safe_value(value)
        && !value.contains([';', ':', '"', '\'', '{', '}']);
    valid.then_some(value)
}

fn strip_important(value: &str) -> &str {
    let lower = value.to_ascii_lowercase();
    match lower.strip_suffix("!important") {
        Some(rest) => value[..rest.len()].trim_end(),
        None => value,
    }
}

fn is_safe_value(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    !["url(", "expression(", "javascript:", "<", ">", "\\"]
        .iter()
        .any(|needle| lower.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_color() {
        assert_eq!(safe_color(" #00b2bb "), Some("#00b2bb"));
        assert_eq!(safe_color("rgb(0, 0, 0)"), Some("rgb(0, 0, 0)"));
        assert_eq!(safe_color("red; background: url(x)"), None);
        assert_eq!(safe_color("url(javascript:x)"), None);
        assert_eq!(safe_color(""), None);
    }

    #[test]
    fn test_keeps_color_and_alignment_only() {
        let style = InlineStyle::parse("font-size: 40px; COLOR: Red ; text-align:center");
        assert_eq!(style.color.as_deref(), Some("Red"));
        assert_eq!(style.text_align, Some(TextAlign::Center));
        assert_eq!(style.to_css(), "color: Red; text-align: center;");
    }

    #[test]
    fn test_last_declaration_wins() {
        let style = InlineStyle::parse("color: red; color: blue");
        assert_eq!(style.to_css(), "color: blue;");
    }

    #[test]
    fn test_rejects_unsafe_values() {
        assert!(InlineStyle::parse("color: expression(alert(1))").is_empty());
        assert!(InlineStyle::parse("color: url(javascript:x)").is_empty());
        assert!(InlineStyle::parse("text-align: middle").is_empty());
    }

    #[test]
    fn test_important_is_dropped() {
        let style = InlineStyle::parse("color: #fff !important");
        assert_eq!(style.color.as_deref(), Some("#fff"));
    }
}
