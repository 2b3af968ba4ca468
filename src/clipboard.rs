//! Clipboard access for the plain-paste button

use crate::error::EditorError;

/// Source of clipboard text
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, EditorError>;
}

/// The operating system clipboard
#[cfg(feature = "system-clipboard")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, EditorError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| EditorError::ClipboardAccess(e.to_string()))?;
        clipboard
            .get_text()
            .map_err(|e| EditorError::ClipboardAccess(e.to_string()))
    }
}

/// The clipboard a runtime reads from unless told otherwise: the system
/// clipboard when built with `system-clipboard`, else an empty one
pub fn default_clipboard() -> Box<dyn Clipboard> {
    #[cfg(feature = "system-clipboard")]
    {
        Box::new(SystemClipboard)
    }
    #[cfg(not(feature = "system-clipboard"))]
    {
        Box::new(MemoryClipboard::default())
    }
}

/// In-memory clipboard for hosts without system access, and for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            denied: false,
        }
    }

    /// A clipboard whose reads are always refused
    pub fn denied() -> Self {
        Self {
            text: None,
            denied: true,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, EditorError> {
        if self.denied {
            return Err(EditorError::ClipboardAccess(
                "clipboard read permission denied".to_string(),
            ));
        }
        Ok(self.text.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::with_text("hello");
        assert_eq!(clipboard.read_text().unwrap(), "hello");
        clipboard.set_text("bye");
        assert_eq!(clipboard.read_text().unwrap(), "bye");
        assert_eq!(MemoryClipboard::default().read_text().unwrap(), "");
    }

    #[cfg(feature = "system-clipboard")]
    #[test]
    fn test_system_clipboard_errors_are_clipboard_access() {
        // Headless machines have no clipboard to open
        match SystemClipboard.read_text() {
            Ok(_) => {}
            Err(err) => assert!(matches!(err, EditorError::ClipboardAccess(_))),
        }
    }

    #[test]
    fn test_denied_clipboard() {
        let err = MemoryClipboard::denied().read_text().unwrap_err();
        assert!(matches!(err, EditorError::ClipboardAccess(_)));
    }
}
