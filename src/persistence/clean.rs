//! Server-side cleaning of saved markup.
//!
//! Independent of the editor's own sanitizer: it works on the raw string,
//! dropping tags outside the allow-list while keeping their text, removing
//! inline event handlers and neutralizing `javascript:` links.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::sanitize::is_allowed_tag;

fn comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<!--.*?-->|<[!?][^>]*>").expect("valid regex"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?\s*([a-zA-Z][a-zA-Z0-9]*)[^>]*>").expect("valid regex"))
}

fn handler_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)on\w+\s*=\s*["'][^"']*["']"#).expect("valid regex"))
}

fn script_href_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)href\s*=\s*["']\s*javascript:[^"']*["']"#).expect("valid regex")
    })
}

/// Clean markup received by the save endpoint
pub fn server_clean_html(html: &str) -> String {
    let html = comment_regex().replace_all(html, "");
    let html = tag_regex().replace_all(&html, |caps: &Captures| {
        let name = caps[1].to_ascii_lowercase();
        if is_allowed_tag(&name) {
            caps[0].to_string()
        } else {
            String::new()
        }
    });
    let html = handler_regex().replace_all(&html, "");
    script_href_regex()
        .replace_all(&html, "href=\"#\"")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disallowed_tags_keep_text() {
        assert_eq!(
            server_clean_html("<table><tr><td>A</td></tr></table><p>b</p>"),
            "A<p>b</p>"
        );
        assert_eq!(server_clean_html("<script>x</script>"), "x");
    }

    #[test]
    fn test_handlers_removed() {
        assert_eq!(
            server_clean_html("<p onclick=\"steal()\">hi</p>"),
            "<p >hi</p>"
        );
    }

    #[test]
    fn test_javascript_href_neutralized() {
        assert_eq!(
            server_clean_html("<a href='JavaScript:void(0)'>x</a>"),
            "<a href=\"#\">x</a>"
        );
        assert_eq!(
            server_clean_html("<a href=\"https://a.b\">x</a>"),
            "<a href=\"https://a.b\">x</a>"
        );
    }

    #[test]
    fn test_comments_removed() {
        assert_eq!(server_clean_html("a<!-- <b>x</b> -->b"), "ab");
    }
}
