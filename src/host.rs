//! The host page an editor mounts into
//!
//! A [`Page`] holds mount containers by element id and the `<style>`
//! elements of its head. Editors write their rendered chrome into a
//! container and the shared stylesheet into the head.

use std::collections::BTreeMap;

/// A `<style>` element in the page head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub id: String,
    pub css: String,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Container id to its inner HTML
    containers: BTreeMap<String, String>,
    head_styles: Vec<StyleElement>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for a page with an empty container
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.add_container(id);
        self
    }

    pub fn add_container(&mut self, id: impl Into<String>) {
        self.containers.entry(id.into()).or_default();
    }

    /// Resolve `#id` or a bare id to an existing container
    pub fn resolve(&self, selector: &str) -> Option<&str> {
        let id = selector.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        if id.is_empty() || id.contains(|c: char| c.is_whitespace() || ".[]:>".contains(c)) {
            return None;
        }
        self.containers
            .get_key_value(id)
            .map(|(key, _)| key.as_str())
    }

    pub fn container_html(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    /// Replace a container's content. Returns false if there is no such
    /// container.
    pub fn set_container_html(&mut self, id: &str, html: impl Into<String>) -> bool {
        match self.containers.get_mut(id) {
            Some(slot) => {
                *slot = html.into();
                true
            }
            None => false,
        }
    }

    pub fn has_style(&self, id: &str) -> bool {
        self.head_styles.iter().any(|style| style.id == id)
    }

    pub fn add_style(&mut self, id: impl Into<String>, css: impl Into<String>) {
        self.head_styles.push(StyleElement {
            id: id.into(),
            css: css.into(),
        });
    }

    pub fn styles(&self) -> &[StyleElement] {
        &self.head_styles
    }
}
