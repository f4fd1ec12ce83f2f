// src/sync/render.rs
//! The only code that writes poll results into the document. Reconciliation
//! is full-replace: the data is small and the refresh interval short.

use crate::sync::dom::{Display, Document, Element};
use crate::sync::view::{EmptyReason, PlayerListView, StatusView};

pub const STATUS_ID: &str = "server-status";
pub const PLAYER_COUNT_ID: &str = "player-count";
pub const NAV_PLAYER_COUNT_ID: &str = "nav-player-count";
pub const PING_ID: &str = "server-ping";

pub const PLAYERS_LIST_ID: &str = "players-list";
pub const PLAYERS_LOADING_ID: &str = "players-loading";
pub const PLAYERS_EMPTY_ID: &str = "players-empty";

pub const NAVBAR_ID: &str = "navbar";

pub const ONLINE_COLOR: &str = "#00ff88";
pub const OFFLINE_COLOR: &str = "#ff4d4d";

pub const UNKNOWN_SENTINEL: &str = "Unknown";
pub const NO_LATENCY_SENTINEL: &str = "-- ms";

pub const OFFLINE_MESSAGE: &str =
    "<i class=\"fa-solid fa-circle-xmark\"></i> Server is currently offline.";
pub const NO_PLAYERS_MESSAGE: &str =
    "<i class=\"fa-solid fa-ghost\"></i> No players online right now.";
pub const LIST_FAILED_MESSAGE: &str =
    "<i class=\"fa-solid fa-triangle-exclamation\"></i> Failed to load player list.";
const LOADING_MESSAGE: &str = "<i class=\"fa-solid fa-spinner fa-spin\"></i> Loading players...";

/// Applies one status poll result to whichever status widgets the current
/// page has. Every target is optional; the same routine runs on all pages.
pub fn render_status(doc: &Document, view: &StatusView) {
    match view {
        StatusView::Online {
            players_online,
            players_max,
            observed_latency_ms,
        } => {
            doc.update(PLAYER_COUNT_ID, |el| {
                el.text = format!("{} / {}", players_online, players_max);
            });
            doc.update(STATUS_ID, |el| {
                el.text = "Online".to_string();
                el.color = Some(ONLINE_COLOR.to_string());
            });
            doc.update(NAV_PLAYER_COUNT_ID, |el| {
                el.text = players_online.to_string();
            });
            doc.update(PING_ID, |el| {
                el.text = format!("{}ms", observed_latency_ms);
            });
        }
        StatusView::Offline => {
            doc.update(PLAYER_COUNT_ID, |el| el.text = "-".to_string());
            doc.update(STATUS_ID, |el| {
                el.text = "Offline".to_string();
                el.color = Some(OFFLINE_COLOR.to_string());
            });
            doc.update(NAV_PLAYER_COUNT_ID, |el| el.text = "0".to_string());
            doc.update(PING_ID, |el| el.text = NO_LATENCY_SENTINEL.to_string());
        }
        StatusView::Unknown => {
            doc.update(PLAYER_COUNT_ID, |el| el.text = UNKNOWN_SENTINEL.to_string());
            doc.update(STATUS_ID, |el| el.text = UNKNOWN_SENTINEL.to_string());
            doc.update(PING_ID, |el| el.text = NO_LATENCY_SENTINEL.to_string());
        }
    }
}

/// Reconciles the player list region. A no-op unless the page carries all
/// three regions; only pages with the live list embed them.
pub fn render_player_list(doc: &Document, view: &PlayerListView) {
    if !doc.contains(PLAYERS_LIST_ID)
        || !doc.contains(PLAYERS_LOADING_ID)
        || !doc.contains(PLAYERS_EMPTY_ID)
    {
        return;
    }

    match view {
        PlayerListView::Players(rows) => {
            clear_loading(doc);
            doc.update(PLAYERS_EMPTY_ID, |el| el.display = Some(Display::Hidden));
            doc.update(PLAYERS_LIST_ID, |el| {
                el.display = Some(Display::Flex);
                el.children = rows
                    .iter()
                    .map(|row| {
                        let mut child = Element::with_classes(&["player-list-item"]);
                        child.html = format!(
                            "<span class=\"player-number\">#{}</span>\
                             <img src=\"{}\" alt=\"{}\" class=\"player-avatar-xs\">\
                             <span class=\"player-name-list\">{}</span>",
                            row.rank, row.avatar_url, row.name, row.name
                        );
                        child.text = row.name.clone();
                        child.dataset.insert("rank".to_string(), row.rank.to_string());
                        child
                            .dataset
                            .insert("avatar".to_string(), row.avatar_url.clone());
                        child
                    })
                    .collect();
            });
        }
        PlayerListView::Empty(reason) => {
            clear_loading(doc);
            doc.update(PLAYERS_LIST_ID, |el| el.display = Some(Display::Hidden));
            doc.update(PLAYERS_EMPTY_ID, |el| {
                el.display = Some(Display::Block);
                el.html = match reason {
                    EmptyReason::Offline => OFFLINE_MESSAGE.to_string(),
                    EmptyReason::NoPlayers => NO_PLAYERS_MESSAGE.to_string(),
                };
            });
        }
        PlayerListView::Unavailable => {
            // List keeps its last contents; the loading region doubles as the
            // failure notice until a later tick succeeds and clears it again.
            doc.update(PLAYERS_LOADING_ID, |el| {
                el.html = LIST_FAILED_MESSAGE.to_string();
                el.display = Some(Display::Block);
            });
        }
    }
}

fn clear_loading(doc: &Document) {
    doc.update(PLAYERS_LOADING_ID, |el| {
        el.display = Some(Display::Hidden);
        el.html = LOADING_MESSAGE.to_string();
    });
}

/// Adds the `visible` class to the navbar shortly after load; markup ships
/// it hidden to avoid a style flicker on first paint.
pub fn reveal_navbar(doc: &Document) {
    doc.update(NAVBAR_ID, |el| el.add_class("visible"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::view::PlayerRow;

    fn status_page() -> Document {
        let doc = Document::new();
        for id in [STATUS_ID, PLAYER_COUNT_ID, NAV_PLAYER_COUNT_ID, PING_ID] {
            doc.create(id);
        }
        doc
    }

    fn list_page() -> Document {
        let doc = Document::new();
        for id in [PLAYERS_LIST_ID, PLAYERS_LOADING_ID, PLAYERS_EMPTY_ID] {
            doc.create(id);
        }
        doc
    }

    #[test]
    fn online_example_renders_counts_and_latency() {
        let doc = status_page();
        render_status(
            &doc,
            &StatusView::Online {
                players_online: 5,
                players_max: 100,
                observed_latency_ms: 40,
            },
        );
        assert_eq!(doc.get(STATUS_ID).unwrap().text, "Online");
        assert_eq!(doc.get(STATUS_ID).unwrap().color.as_deref(), Some(ONLINE_COLOR));
        assert_eq!(doc.get(PLAYER_COUNT_ID).unwrap().text, "5 / 100");
        assert_eq!(doc.get(NAV_PLAYER_COUNT_ID).unwrap().text, "5");
        assert_eq!(doc.get(PING_ID).unwrap().text, "40ms");
    }

    #[test]
    fn offline_example_renders_sentinels() {
        let doc = status_page();
        render_status(&doc, &StatusView::Offline);
        assert_eq!(doc.get(STATUS_ID).unwrap().text, "Offline");
        assert_eq!(doc.get(STATUS_ID).unwrap().color.as_deref(), Some(OFFLINE_COLOR));
        assert_eq!(doc.get(PLAYER_COUNT_ID).unwrap().text, "-");
        assert_eq!(doc.get(NAV_PLAYER_COUNT_ID).unwrap().text, "0");
        assert_eq!(doc.get(PING_ID).unwrap().text, NO_LATENCY_SENTINEL);
    }

    #[test]
    fn unknown_renders_sentinels_everywhere() {
        let doc = status_page();
        render_status(&doc, &StatusView::Unknown);
        assert_eq!(doc.get(STATUS_ID).unwrap().text, UNKNOWN_SENTINEL);
        assert_eq!(doc.get(PLAYER_COUNT_ID).unwrap().text, UNKNOWN_SENTINEL);
        assert_eq!(doc.get(PING_ID).unwrap().text, NO_LATENCY_SENTINEL);
    }

    #[test]
    fn status_render_tolerates_partial_page() {
        let doc = Document::new();
        doc.create(STATUS_ID);
        // Must not panic with the other three targets absent.
        render_status(
            &doc,
            &StatusView::Online {
                players_online: 1,
                players_max: 2,
                observed_latency_ms: 3,
            },
        );
        assert_eq!(doc.get(STATUS_ID).unwrap().text, "Online");
    }

    #[test]
    fn list_render_requires_all_three_regions() {
        let doc = Document::new();
        doc.create(PLAYERS_LIST_ID);
        doc.create(PLAYERS_LOADING_ID);
        render_player_list(&doc, &PlayerListView::Empty(EmptyReason::Offline));
        // No empty region on this page, so nothing was touched.
        assert!(doc.get(PLAYERS_LIST_ID).unwrap().display.is_none());
    }

    #[test]
    fn rows_replace_children_exactly() {
        let doc = list_page();
        let rows = vec![
            PlayerRow {
                rank: 1,
                name: "Alex".into(),
                avatar_url: "https://mc-heads.net/avatar/Alex/32".into(),
            },
            PlayerRow {
                rank: 2,
                name: "Steve".into(),
                avatar_url: "https://mc-heads.net/avatar/Steve/32".into(),
            },
        ];
        render_player_list(&doc, &PlayerListView::Players(rows.clone()));
        render_player_list(&doc, &PlayerListView::Players(rows));

        let list = doc.get(PLAYERS_LIST_ID).unwrap();
        assert_eq!(list.display, Some(Display::Flex));
        assert_eq!(list.children.len(), 2);
        for (i, child) in list.children.iter().enumerate() {
            assert_eq!(child.dataset["rank"], (i + 1).to_string());
            assert!(child.dataset["avatar"].contains(&child.text));
        }
        assert!(!doc.get(PLAYERS_LOADING_ID).unwrap().is_visible());
        assert!(!doc.get(PLAYERS_EMPTY_ID).unwrap().is_visible());
    }

    #[test]
    fn empty_reasons_use_distinct_messages() {
        let doc = list_page();
        render_player_list(&doc, &PlayerListView::Empty(EmptyReason::Offline));
        assert_eq!(doc.get(PLAYERS_EMPTY_ID).unwrap().html, OFFLINE_MESSAGE);
        assert!(!doc.get(PLAYERS_LIST_ID).unwrap().is_visible());

        render_player_list(&doc, &PlayerListView::Empty(EmptyReason::NoPlayers));
        assert_eq!(doc.get(PLAYERS_EMPTY_ID).unwrap().html, NO_PLAYERS_MESSAGE);
    }

    #[test]
    fn failure_notice_is_recoverable() {
        let doc = list_page();
        render_player_list(&doc, &PlayerListView::Unavailable);
        let loading = doc.get(PLAYERS_LOADING_ID).unwrap();
        assert_eq!(loading.html, LIST_FAILED_MESSAGE);
        assert!(loading.is_visible());
        // List untouched by the failure.
        assert!(doc.get(PLAYERS_LIST_ID).unwrap().display.is_none());

        // Next successful tick clears the notice again.
        render_player_list(&doc, &PlayerListView::Empty(EmptyReason::NoPlayers));
        let loading = doc.get(PLAYERS_LOADING_ID).unwrap();
        assert!(!loading.is_visible());
        assert_ne!(loading.html, LIST_FAILED_MESSAGE);
    }

    #[test]
    fn navbar_reveal_adds_class_once() {
        let doc = Document::new();
        doc.create(NAVBAR_ID);
        reveal_navbar(&doc);
        reveal_navbar(&doc);
        assert_eq!(doc.get(NAVBAR_ID).unwrap().classes, ["visible"]);
    }
}
