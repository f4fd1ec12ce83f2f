// src/sync/feedback.rs
//! Visual acknowledgment after a successful copy: every tagged trigger
//! briefly shows a check glyph, then restores its pre-feedback content.
//! The first snapshot taken is authoritative; re-triggering mid-feedback
//! only extends the confirmation, it never re-snapshots.

use std::sync::Arc;
use std::time::Duration;

use crate::sync::dom::Document;

pub const PRIMARY_TRIGGER_CLASS: &str = "copy-btn";
pub const INLINE_TRIGGER_CLASS: &str = "copy-icon-btn";

pub const FEEDBACK_COLOR: &str = "#22c55e";
pub const RESTORE_DELAY: Duration = Duration::from_secs(2);

pub const PRIMARY_CONFIRMATION: &str = "<i class=\"fa-solid fa-check\"></i> IP Copied!";
pub const INLINE_CONFIRMATION: &str = "<i class=\"fa-solid fa-check\"></i>";

const SNAPSHOT_KEY: &str = "original-html";
const GENERATION_KEY: &str = "feedback-gen";

/// Applies feedback to every copy trigger on the page and schedules the
/// restorations.
pub fn show_copy_feedback(doc: &Arc<Document>) {
    for id in doc.ids_with_class(PRIMARY_TRIGGER_CLASS) {
        let generation = apply_feedback(doc, &id, true);
        schedule_restore(Arc::clone(doc), id, generation);
    }
    for id in doc.ids_with_class(INLINE_TRIGGER_CLASS) {
        let generation = apply_feedback(doc, &id, false);
        schedule_restore(Arc::clone(doc), id, generation);
    }
}

/// Swaps the trigger's content for the confirmation, snapshotting the
/// original content only if no snapshot is pending. Returns the generation
/// token the matching restoration must present.
pub fn apply_feedback(doc: &Document, id: &str, primary: bool) -> u64 {
    let mut generation = 0;
    doc.update(id, |el| {
        if !el.dataset.contains_key(SNAPSHOT_KEY) {
            el.dataset.insert(SNAPSHOT_KEY.to_string(), el.html.clone());
        }
        generation = el
            .dataset
            .get(GENERATION_KEY)
            .and_then(|g| g.parse::<u64>().ok())
            .unwrap_or(0)
            + 1;
        el.dataset
            .insert(GENERATION_KEY.to_string(), generation.to_string());
        if primary {
            el.html = PRIMARY_CONFIRMATION.to_string();
            el.background = Some(FEEDBACK_COLOR.to_string());
            el.color = Some("#000".to_string());
        } else {
            el.html = INLINE_CONFIRMATION.to_string();
            el.color = Some(FEEDBACK_COLOR.to_string());
        }
    });
    generation
}

/// Restores the first snapshot and default styling, but only for the
/// latest generation: earlier timers from re-triggers must not cut the
/// confirmation short.
pub fn restore_if_current(doc: &Document, id: &str, generation: u64) -> bool {
    let mut restored = false;
    doc.update(id, |el| {
        let current = el
            .dataset
            .get(GENERATION_KEY)
            .and_then(|g| g.parse::<u64>().ok())
            .unwrap_or(0);
        if current != generation {
            return;
        }
        if let Some(original) = el.dataset.remove(SNAPSHOT_KEY) {
            el.html = original;
        }
        el.dataset.remove(GENERATION_KEY);
        el.background = None;
        el.color = None;
        restored = true;
    });
    restored
}

fn schedule_restore(doc: Arc<Document>, id: String, generation: u64) {
    tokio::spawn(async move {
        tokio::time::sleep(RESTORE_DELAY).await;
        restore_if_current(&doc, &id, generation);
    });
}
