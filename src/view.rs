//! View layer - renders an editor model into the chrome's HTML
//!
//! The output is the container's inner HTML: toolbar, editable surface,
//! counter, notice and the link dialog. Rendering never mutates the model.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::commands::{CommandDef, CommandId, TOOLBAR_GROUPS};
use crate::config::EditorConfig;
use crate::model::{EditorModel, LinkDialogState};
use crate::sanitize::safe_color;

/// Background of the reset swatch
const RESET_SWATCH_BACKGROUND: &str = "linear-gradient(45deg, #fff 45%, #d32f2f 50%, #fff 55%)";

/// Render the full chrome of one editor
pub fn render(model: &EditorModel) -> String {
    let mut out = String::new();

    let class = if model.ui.enabled {
        "rich-editor"
    } else {
        "rich-editor rich-editor-disabled"
    };
    let _ = write!(out, "<div class=\"{class}\">");
    render_toolbar(model, &mut out);
    render_content(model, &mut out);
    if model.config.show_char_count {
        let _ = write!(
            out,
            "<div class=\"rich-editor-footer\"><span class=\"rich-editor-charcount\">{}</span></div>",
            text(&model.counter_text())
        );
    }
    if let Some(notice) = &model.ui.notice {
        let _ = write!(
            out,
            "<div class=\"rich-editor-notice\" role=\"alert\">{}</div>",
            text(notice)
        );
    }
    out.push_str("</div>");

    render_link_dialog(model.ui.link_dialog(), &mut out);
    out
}

// ============================================================================
// Toolbar
// ============================================================================

/// Extra button attributes while the editor is disabled
fn disabled_attrs(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " disabled aria-disabled=\"true\""
    }
}

fn render_toolbar(model: &EditorModel, out: &mut String) {
    let disabled = disabled_attrs(model.ui.enabled);
    out.push_str("<div class=\"rich-editor-toolbar\">");
    for (index, group) in TOOLBAR_GROUPS.iter().enumerate() {
        out.push_str("<div class=\"rich-editor-toolbar-group\">");
        for def in group.iter() {
            render_button(def, disabled, out);
        }
        out.push_str("</div>");

        // The color picker sits right after the inline styles
        if index == 0 {
            render_color_picker(&model.config, model.ui.is_color_picker_open(), disabled, out);
        }
    }
    out.push_str("</div>");
}

fn render_button(def: &CommandDef, disabled: &str, out: &mut String) {
    let _ = write!(
        out,
        "<button type=\"button\" class=\"rich-editor-btn\" data-command=\"{}\" title=\"{}\"{disabled}>{}</button>",
        def.id.name(),
        attr(def.title),
        button_label(def)
    );
}

fn button_label(def: &CommandDef) -> String {
    let label = text(def.label);
    match def.id {
        CommandId::Bold => format!("<strong>{label}</strong>"),
        CommandId::Italic => format!("<em>{label}</em>"),
        CommandId::Underline => format!("<u>{label}</u>"),
        _ => label.into_owned(),
    }
}

fn render_color_picker(config: &EditorConfig, open: bool, disabled: &str, out: &mut String) {
    out.push_str("<div class=\"rich-editor-toolbar-group\">");
    let _ = write!(
        out,
        "<button type=\"button\" class=\"rich-editor-btn rich-editor-color-trigger\" \
         title=\"Couleur du texte\"{disabled}><span class=\"color-icon\">A</span></button>"
    );
    let display = if open { "flex" } else { "none" };
    let _ = write!(
        out,
        "<div class=\"rich-editor-color-picker\" style=\"display: {display};\">"
    );
    for (index, swatch) in config.colors.iter().enumerate() {
        let background = if swatch.is_reset() {
            Some(RESET_SWATCH_BACKGROUND)
        } else {
            safe_color(&swatch.value)
        };
        let _ = write!(
            out,
            "<button type=\"button\" class=\"rich-editor-color-btn\" data-index=\"{index}\" \
             data-color=\"{}\" title=\"{}\"",
            attr(&swatch.value),
            attr(&swatch.name)
        );
        match background {
            Some(background) => {
                let _ = write!(out, " style=\"background: {};\"", attr(background));
            }
            None => tracing::warn!(value = %swatch.value, "swatch color is not a plain CSS color"),
        }
        out.push_str("></button>");
    }
    out.push_str("</div></div>");
}

// ============================================================================
// Content
// ============================================================================

fn render_content(model: &EditorModel, out: &mut String) {
    let config = &model.config;
    let _ = write!(
        out,
        "<div class=\"rich-editor-content\" contenteditable=\"{}\" data-placeholder=\"{}\" \
         style=\"min-height: {}; max-height: {};\">",
        model.ui.enabled,
        attr(&config.placeholder),
        attr(&config.min_height),
        attr(&config.max_height)
    );
    out.push_str(&model.document.inner_html(model.document.root()));
    out.push_str("</div>");
}

// ============================================================================
// Link dialog
// ============================================================================

fn render_link_dialog(dialog: Option<&LinkDialogState>, out: &mut String) {
    let display = if dialog.is_some() { "flex" } else { "none" };
    let (link_text, url, new_tab, error) = match dialog {
        Some(d) => (d.text.as_str(), d.url.as_str(), d.open_in_new_tab, d.error.as_deref()),
        None => ("", "", true, None),
    };

    let _ = write!(
        out,
        "<div class=\"rich-editor-link-modal\" style=\"display: {display};\">\
         <div class=\"rich-editor-link-modal-content\">\
         <div class=\"rich-editor-link-modal-header\"><h3>Insérer un lien</h3>\
         <button type=\"button\" class=\"rich-editor-link-close\">✕</button></div>\
         <div class=\"rich-editor-link-modal-body\">"
    );
    let _ = write!(
        out,
        "<label>Texte du lien<input type=\"text\" class=\"rich-editor-link-text\" \
         placeholder=\"Texte à afficher\" value=\"{}\"></label>",
        attr(link_text)
    );
    let _ = write!(
        out,
        "<label>URL<input type=\"url\" class=\"rich-editor-link-url\" \
         placeholder=\"https://exemple.com\" value=\"{}\"></label>",
        attr(url)
    );
    let _ = write!(
        out,
        "<label><input type=\"checkbox\" class=\"rich-editor-link-newtab\"{}> \
         Ouvrir dans un nouvel onglet</label>",
        if new_tab { " checked" } else { "" }
    );
    if let Some(error) = error {
        let _ = write!(
            out,
            "<div class=\"rich-editor-link-error\">{}</div>",
            text(error)
        );
    }
    out.push_str(
        "</div><div class=\"rich-editor-link-modal-footer\">\
         <button type=\"button\" class=\"rich-editor-link-cancel\">Annuler</button>\
         <button type=\"button\" class=\"rich-editor-link-insert\">Insérer</button>\
         </div></div></div>",
    );
}
