//! Logging setup and debug-build state snapshots
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,keymap=debug` - scoped filtering
//! - `RUST_LOG=rich_editor::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/rich-editor/logs/rich-editor.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_NAME;
use crate::model::{EditorModel, ToolbarState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging always
/// writes debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A host may have installed its own subscriber already
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of editor state for diffing around an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub html: String,
    pub selection: Option<String>,
    pub toolbar: ToolbarState,
    pub char_count: usize,
    pub has_saved_selection: bool,
}

impl DocumentSnapshot {
    pub fn from_model(model: &EditorModel) -> Self {
        let doc = &model.document;
        Self {
            html: doc.inner_html(doc.root()),
            selection: model.selection.map(|range| {
                format!(
                    "{}:{} → {}:{}",
                    range.anchor.node, range.anchor.offset, range.focus.node, range.focus.offset
                )
            }),
            toolbar: model.ui.toolbar_state(),
            char_count: model.char_count,
            has_saved_selection: model.saved_selection.has_saved(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &DocumentSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.html != other.html {
            changes.push(format!(
                "content: {} → {} bytes",
                self.html.len(),
                other.html.len()
            ));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: {} → {}",
                self.selection.as_deref().unwrap_or("none"),
                other.selection.as_deref().unwrap_or("none")
            ));
        }
        if self.toolbar != other.toolbar {
            changes.push(format!("toolbar: {:?} → {:?}", self.toolbar, other.toolbar));
        }
        if self.char_count != other.char_count {
            changes.push(format!("count: {} → {}", self.char_count, other.char_count));
        }
        if self.has_saved_selection != other.has_saved_selection {
            let status = if other.has_saved_selection {
                "saved"
            } else {
                "released"
            };
            changes.push(format!("snapshot {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
