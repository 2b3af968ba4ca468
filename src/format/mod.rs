//! The editor's formatting model.
//!
//! Every toolbar action maps to a [`FormatCommand`], applied to a range of
//! the surface with [`apply`]. Commands only ever create allow-listed
//! elements (`strong`, `em`, `u`, `span`, `ul`, `ol`, `li`, `div`, `a`,
//! `br`), so whatever sequence runs, the cleaned output keeps its shape.

mod block;
mod edit;
mod inline;

use crate::dom::{Attribute, Document, DomRange, NodeId};
use crate::model::LinkRequest;
use crate::sanitize::TextAlign;

pub use block::ListKind;

/// A formatting operation on the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatCommand {
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    SetForegroundColor(String),
    ClearFormatting,
    List(ListKind),
    Align(TextAlign),
    CreateLink(LinkRequest),
    RemoveLink,
    InsertPlainText(String),
}

/// Apply `command` to `range` and return the selection afterwards
pub fn apply(doc: &mut Document, range: &DomRange, command: &FormatCommand) -> DomRange {
    tracing::debug!(?command, collapsed = range.is_collapsed(), "apply format");
    match command {
        FormatCommand::ToggleBold => inline::toggle(doc, range, inline::BOLD),
        FormatCommand::ToggleItalic => inline::toggle(doc, range, inline::ITALIC),
        FormatCommand::ToggleUnderline => inline::toggle(doc, range, inline::UNDERLINE),
        FormatCommand::SetForegroundColor(color) => inline::set_color(doc, range, color),
        FormatCommand::ClearFormatting => inline::clear_formatting(doc, range),
        FormatCommand::List(kind) => block::toggle_list(doc, range, *kind),
        FormatCommand::Align(alignment) => block::align(doc, range, *alignment),
        FormatCommand::CreateLink(request) => insert_link(doc, range, request),
        FormatCommand::RemoveLink => inline::remove_link(doc, range),
        FormatCommand::InsertPlainText(text) => insert_plain_text(doc, range, text),
    }
}

/// Replace the selection with text. Newlines become `<br>`.
fn insert_plain_text(doc: &mut Document, range: &DomRange, text: &str) -> DomRange {
    let (start, end) = edit::split_boundaries(doc, range);
    let at = edit::delete_contents(doc, start, end);

    let mut nodes: Vec<NodeId> = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(doc.create_element("br", vec![]));
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            nodes.push(doc.create_text(line));
        }
    }

    let caret = edit::insert_nodes(doc, at, &nodes);
    DomRange::collapsed(caret)
}

/// Replace the selection with a link and put the caret right after it
fn insert_link(doc: &mut Document, range: &DomRange, request: &LinkRequest) -> DomRange {
    let (start, end) = edit::split_boundaries(doc, range);
    let at = edit::delete_contents(doc, start, end);

    let mut attrs = vec![Attribute::new("href", request.url.trim())];
    if request.open_in_new_tab {
        attrs.push(Attribute::new("target", "_blank"));
        attrs.push(Attribute::new("rel", "noopener noreferrer"));
    }
    let link = doc.create_element("a", attrs);
    let label = doc.create_text(&request.label());
    doc.append_child(link, label);

    let caret = edit::insert_nodes(doc, at, &[link]);
    DomRange::collapsed(caret)
}
