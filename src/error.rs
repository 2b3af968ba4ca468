//! Error kinds reported by the editor core

use std::fmt;

/// Failures the editor reports to its caller or to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The mount target could not be resolved. Fatal to construction.
    Configuration(String),
    /// The clipboard could not be read. Shown to the user; the editor stays
    /// usable.
    ClipboardAccess(String),
    /// User input was rejected, e.g. an empty link URL
    Validation(String),
    /// Raised by the persistence layer, never by the editor itself
    Storage(String),
}

impl EditorError {
    /// Message suitable for showing to the user
    pub fn message(&self) -> &str {
        match self {
            EditorError::Configuration(m)
            | EditorError::ClipboardAccess(m)
            | EditorError::Validation(m)
            | EditorError::Storage(m) => m,
        }
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::Configuration(m) => write!(f, "Configuration error: {}", m),
            EditorError::ClipboardAccess(m) => write!(f, "Clipboard access error: {}", m),
            EditorError::Validation(m) => write!(f, "Validation error: {}", m),
            EditorError::Storage(m) => write!(f, "Storage error: {}", m),
        }
    }
}

impl std::error::Error for EditorError {}
