// src/sync/clipboard.rs
//! Copy-the-server-IP helper. Prefers the platform clipboard API; falls
//! back to the legacy select-and-copy technique through a transient hidden
//! text field. Copy never fails silently: if both paths fail the user gets
//! a blocking prompt with the literal address.

use std::fmt;
use std::sync::Arc;

use log::{error, warn};

use crate::sync::dom::{Display, Document, Element};
use crate::sync::feedback;

pub const FALLBACK_FIELD_ID: &str = "clipboard-fallback-field";

#[derive(Debug)]
pub enum ClipboardError {
    /// No clipboard API in this context.
    Unavailable,
    /// Permission denied by the platform.
    Denied,
    /// The legacy copy command reported failure.
    CommandFailed,
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "clipboard API unavailable"),
            Self::Denied => write!(f, "clipboard permission denied"),
            Self::CommandFailed => write!(f, "legacy copy command failed"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// The platform seam. `write_text` is the preferred API; `copy_selection`
/// is the legacy command applied to the currently selected document field.
pub trait ClipboardBackend {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
    fn copy_selection(&self, doc: &Document, field_id: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Preferred API succeeded; no fallback field was ever created.
    Primary,
    /// Legacy path succeeded.
    Fallback,
    /// Both paths failed; a manual-copy prompt was shown.
    ManualPrompt,
}

/// Removes the transient field on every exit path, including when the
/// legacy copy itself errors.
struct FallbackField<'a> {
    doc: &'a Document,
}

impl<'a> FallbackField<'a> {
    fn insert(doc: &'a Document, text: &str) -> Self {
        let mut field = Element::default();
        field.text = text.to_string();
        // Part of the document but never visible.
        field.display = Some(Display::Hidden);
        field.dataset.insert("position".to_string(), "fixed".to_string());
        field.dataset.insert("left".to_string(), "-9999px".to_string());
        doc.insert(FALLBACK_FIELD_ID, field);
        Self { doc }
    }

    fn focus_and_select(&self) {
        self.doc.update(FALLBACK_FIELD_ID, |el| {
            el.dataset.insert("focused".to_string(), "true".to_string());
            el.dataset.insert("selected".to_string(), "true".to_string());
        });
    }
}

impl Drop for FallbackField<'_> {
    fn drop(&mut self) {
        self.doc.remove(FALLBACK_FIELD_ID);
    }
}

/// Puts `address` on the clipboard and triggers the uniform copy feedback
/// on whichever path succeeded.
pub fn copy_server_address(
    backend: &dyn ClipboardBackend,
    doc: &Arc<Document>,
    address: &str,
) -> CopyOutcome {
    match backend.write_text(address) {
        Ok(()) => {
            feedback::show_copy_feedback(doc);
            CopyOutcome::Primary
        }
        Err(e) => {
            warn!("clipboard API failed, trying fallback: {}", e);
            fallback_copy(backend, doc, address)
        }
    }
}

fn fallback_copy(
    backend: &dyn ClipboardBackend,
    doc: &Arc<Document>,
    address: &str,
) -> CopyOutcome {
    let field = FallbackField::insert(doc, address);
    field.focus_and_select();
    match backend.copy_selection(doc, FALLBACK_FIELD_ID) {
        Ok(()) => {
            feedback::show_copy_feedback(doc);
            CopyOutcome::Fallback
        }
        Err(e) => {
            error!("fallback copy failed: {}", e);
            doc.alert(format!(
                "Failed to copy IP. Please manually copy: {}",
                address
            ));
            CopyOutcome::ManualPrompt
        }
    }
}
