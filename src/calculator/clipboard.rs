//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),
    #[error("Failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Copy)
}
