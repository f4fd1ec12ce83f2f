// src/sync/toggle.rs
//! Event-driven UI toggles: mobile nav and the rank/kit detail modals.
//! Stateless between events; the open/closed state lives in the document's
//! own class and display attributes.

use crate::sync::dom::{Display, Document};

pub const NAV_LINKS_ID: &str = "nav-links";
pub const NAV_ICON_ID: &str = "nav-icon";

pub const NAV_OPEN_CLASS: &str = "active";
pub const ICON_CLOSED: &str = "fa-bars";
pub const ICON_OPEN: &str = "fa-xmark";

/// Raw clicks are translated to these by the markup layer; modal content
/// clicks simply never produce an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    NavToggle,
    /// Document-wide click outside both the nav trigger and the panel.
    OutsideClick,
    OpenRankModal(String),
    OpenKitModal(String),
    CloseModal(String),
    BackdropClick(String),
}

pub fn rank_modal_id(rank: &str) -> String {
    format!("modal-{}", rank)
}

pub fn kit_modal_id(kit: &str) -> String {
    format!("modal-kit-{}", kit)
}

pub fn nav_open(doc: &Document) -> bool {
    doc.get(NAV_LINKS_ID)
        .map(|el| el.has_class(NAV_OPEN_CLASS))
        .unwrap_or(false)
}

pub fn handle_ui_event(doc: &Document, event: &UiEvent) {
    match event {
        UiEvent::NavToggle => {
            let opening = !nav_open(doc);
            doc.update(NAV_LINKS_ID, |el| {
                if opening {
                    el.add_class(NAV_OPEN_CLASS);
                } else {
                    el.remove_class(NAV_OPEN_CLASS);
                }
            });
            set_nav_icon(doc, opening);
        }
        UiEvent::OutsideClick => {
            if nav_open(doc) {
                doc.update(NAV_LINKS_ID, |el| el.remove_class(NAV_OPEN_CLASS));
                set_nav_icon(doc, false);
            }
        }
        UiEvent::OpenRankModal(rank) => {
            doc.update(&rank_modal_id(rank), |el| el.display = Some(Display::Block));
        }
        UiEvent::OpenKitModal(kit) => {
            doc.update(&kit_modal_id(kit), |el| el.display = Some(Display::Block));
        }
        UiEvent::CloseModal(id) | UiEvent::BackdropClick(id) => {
            doc.update(id, |el| el.display = Some(Display::Hidden));
        }
    }
}

fn set_nav_icon(doc: &Document, open: bool) {
    doc.update(NAV_ICON_ID, |el| {
        if open {
            el.remove_class(ICON_CLOSED);
            el.add_class(ICON_OPEN);
        } else {
            el.remove_class(ICON_OPEN);
            el.add_class(ICON_CLOSED);
        }
    });
}
