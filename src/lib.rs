//! Rich Editor - headless rich-text editor core
//!
//! This crate provides the editable surface, allow-listed HTML cleaning,
//! toolbar and link dialog state machines and the load/save contract of a
//! small WYSIWYG editor, following the Elm Architecture pattern: events
//! become [`Msg`]s, `update` applies them to an
//! [`EditorModel`](model::EditorModel) and returns a [`Cmd`] for the host.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dom;
pub mod editable;
pub mod editor;
pub mod error;
pub mod format;
pub mod host;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod persistence;
pub mod runtime;
pub mod sanitize;
pub mod styles;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{ColorSwatch, EditorConfig, EditorOptions};
pub use editor::Editor;
pub use error::EditorError;
pub use host::Page;
pub use messages::Msg;
pub use runtime::{Dispatch, Runtime};
pub use sanitize::{clean_html, clean_pasted_text};
