//! The stylesheet shared by every editor on a page

use std::sync::OnceLock;

use crate::host::Page;

/// Id of the injected `<style>` element
pub const STYLE_ELEMENT_ID: &str = "rich-editor-styles";

static STYLESHEET: OnceLock<String> = OnceLock::new();

/// The editor stylesheet, built once per process
pub fn stylesheet() -> &'static str {
    STYLESHEET.get_or_init(build_stylesheet)
}

/// Add the stylesheet to the page head unless it is already there.
/// Returns true if it was added.
pub fn inject_styles(page: &mut Page) -> bool {
    if page.has_style(STYLE_ELEMENT_ID) {
        return false;
    }
    page.add_style(STYLE_ELEMENT_ID, stylesheet());
    tracing::debug!("editor styles injected");
    true
}

fn build_stylesheet() -> String {
    const PRIMARY: &str = "#00b2bb";
    const SECONDARY: &str = "#1F154d";

    format!(
        r#".rich-editor {{
  font-family: 'Barlow Semi Condensed', sans-serif;
  border: 2px solid #e0e0e0;
  border-radius: 15px;
  overflow: hidden;
  background-color: #fff;
}}
.rich-editor:focus-within {{
  border-color: {primary};
}}
.rich-editor-toolbar {{
  background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
  padding: 12px;
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}}
.rich-editor-toolbar-group {{
  display: flex;
  gap: 4px;
  position: relative;
  padding-right: 8px;
  border-right: 1px solid rgba(255, 255, 255, 0.3);
}}
.rich-editor-toolbar-group:last-child {{
  border-right: none;
}}
.rich-editor-btn {{
  background: rgba(255, 255, 255, 0.2);
  border: 1px solid rgba(255, 255, 255, 0.3);
  color: #fff;
  padding: 6px 12px;
  border-radius: 8px;
  cursor: pointer;
}}
.rich-editor-btn:hover {{
  background: rgba(255, 255, 255, 0.35);
}}
.rich-editor-color-picker {{
  position: absolute;
  top: 100%;
  left: 0;
  z-index: 1000;
  flex-wrap: wrap;
  gap: 6px;
  width: 180px;
  padding: 10px;
  background: #fff;
  border-radius: 10px;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
}}
.rich-editor-color-btn {{
  width: 30px;
  height: 30px;
  border: 2px solid #e0e0e0;
  border-radius: 50%;
  cursor: pointer;
}}
.rich-editor-content {{
  padding: 20px;
  overflow-y: auto;
  outline: none;
  line-height: 1.6;
  color: #333;
}}
.rich-editor-content:empty::before {{
  content: attr(data-placeholder);
  color: #999;
  font-style: italic;
}}
.rich-editor-content a {{
  color: {primary};
  text-decoration: underline;
}}
.rich-editor-footer {{
  padding: 8px 20px;
  background: #f8f9fa;
  border-top: 1px solid #e0e0e0;
  text-align: right;
  font-size: 13px;
  color: #666;
}}
.rich-editor-notice {{
  padding: 8px 20px;
  background: #fdecea;
  color: #d32f2f;
  font-size: 13px;
}}
.rich-editor-disabled {{
  opacity: 0.6;
  pointer-events: none;
}}
.rich-editor-link-modal {{
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  align-items: center;
  justify-content: center;
  z-index: 10000;
}}
.rich-editor-link-modal-content {{
  background: #fff;
  border-radius: 15px;
  width: 90%;
  max-width: 500px;
}}
.rich-editor-link-modal-header {{
  background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
  color: #fff;
  padding: 15px 20px;
  display: flex;
  justify-content: space-between;
}}
.rich-editor-link-modal-body {{
  padding: 20px;
  display: flex;
  flex-direction: column;
  gap: 12px;
}}
.rich-editor-link-error {{
  color: #d32f2f;
  font-size: 13px;
}}
.rich-editor-link-modal-footer {{
  padding: 15px 20px;
  display: flex;
  justify-content: flex-end;
  gap: 10px;
}}
"#,
        primary = PRIMARY,
        secondary = SECONDARY,
    )
}
