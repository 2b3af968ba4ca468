//! Link dialog state and the validated request it produces

use crate::error::EditorError;

/// Shown when the dialog is confirmed without a URL
pub const EMPTY_URL_MESSAGE: &str = "Veuillez entrer une URL";

/// A link to insert over the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub text: String,
    pub url: String,
    pub open_in_new_tab: bool,
}

impl LinkRequest {
    pub fn new(text: impl Into<String>, url: impl Into<String>, open_in_new_tab: bool) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            open_in_new_tab,
        }
    }

    /// The URL must be non-empty once trimmed
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.url.trim().is_empty() {
            return Err(EditorError::Validation(EMPTY_URL_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Visible text of the link: the trimmed text, or the URL when empty
    pub fn label(&self) -> String {
        let text = self.text.trim();
        if text.is_empty() {
            self.url.trim().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Input fields of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Text,
    Url,
    NewTab,
}

/// Contents of a visible link dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDialogState {
    pub text: String,
    pub url: String,
    pub open_in_new_tab: bool,
    /// Inline validation message
    pub error: Option<String>,
    pub focused: Option<DialogField>,
}

impl LinkDialogState {
    /// A fresh dialog: text pre-filled, empty URL, new tab checked, URL
    /// field focused
    pub fn new(selected_text: impl Into<String>) -> Self {
        Self {
            text: selected_text.into(),
            url: String::new(),
            open_in_new_tab: true,
            error: None,
            focused: Some(DialogField::Url),
        }
    }

    pub fn request(&self) -> LinkRequest {
        LinkRequest::new(self.text.clone(), self.url.clone(), self.open_in_new_tab)
    }

    /// Validate the inputs. On failure the message is kept for display and
    /// `None` is returned.
    pub fn submit(&mut self) -> Option<LinkRequest> {
        let request = self.request();
        match request.validate() {
            Ok(()) => {
                self.error = None;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.message().to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_is_rejected() {
        let request = LinkRequest::new("x", "   ", true);
        assert_eq!(
            request.validate(),
            Err(EditorError::Validation(EMPTY_URL_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_label_falls_back_to_url() {
        assert_eq!(LinkRequest::new("  ", " https://a.b ", false).label(), "https://a.b");
        assert_eq!(LinkRequest::new(" Site ", "https://a.b", false).label(), "Site");
    }

    #[test]
    fn test_new_dialog_defaults() {
        let dialog = LinkDialogState::new("selected");
        assert_eq!(dialog.text, "selected");
        assert!(dialog.url.is_empty());
        assert!(dialog.open_in_new_tab);
        assert_eq!(dialog.focused, Some(DialogField::Url));
    }

    #[test]
    fn test_submit_sets_and_clears_error() {
        let mut dialog = LinkDialogState::new("");
        assert!(dialog.submit().is_none());
        assert_eq!(dialog.error.as_deref(), Some(EMPTY_URL_MESSAGE));

        dialog.url = "https://example.com".into();
        let request = dialog.submit().unwrap();
        assert_eq!(request.url, "https://example.com");
        assert!(dialog.error.is_none());
    }
}
