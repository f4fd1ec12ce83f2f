// src/sync/view.rs
//! View-state derivation: pure functions from a fetched status response to
//! the minimal data each widget needs. No document access happens here.

use std::time::Duration;

use crate::models::status::StatusResponse;

/// What the status widgets should show after one poll round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Online {
        players_online: u32,
        players_max: u32,
        /// Round-trip of the status request itself, not the game server's
        /// real ping. Labeled "observed latency" everywhere for that reason.
        observed_latency_ms: u64,
    },
    Offline,
    /// Poll failed (transport, non-2xx, malformed body). Distinct from
    /// Offline: we know nothing, so sentinels are shown instead.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    /// 1-based position in the API's ordering.
    pub rank: usize,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    Offline,
    NoPlayers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerListView {
    Players(Vec<PlayerRow>),
    Empty(EmptyReason),
    /// Fetch failed; the list keeps whatever it showed last.
    Unavailable,
}

pub fn avatar_url(base: &str, name: &str, size: u32) -> String {
    format!("{}/{}/{}", base, name, size)
}

pub fn status_view(resp: &StatusResponse, latency: Duration) -> StatusView {
    if !resp.online {
        return StatusView::Offline;
    }
    let (players_online, players_max) = resp
        .players
        .as_ref()
        .map(|p| (p.online, p.max))
        .unwrap_or((0, 0));
    StatusView::Online {
        players_online,
        players_max,
        observed_latency_ms: latency.as_millis() as u64,
    }
}

pub fn player_list_view(resp: &StatusResponse, avatar_base: &str, avatar_size: u32) -> PlayerListView {
    if !resp.online {
        return PlayerListView::Empty(EmptyReason::Offline);
    }
    let names = resp.player_names();
    if names.is_empty() {
        return PlayerListView::Empty(EmptyReason::NoPlayers);
    }
    let rows = names
        .iter()
        .enumerate()
        .map(|(i, name)| PlayerRow {
            rank: i + 1,
            name: name.clone(),
            avatar_url: avatar_url(avatar_base, name, avatar_size),
        })
        .collect();
    PlayerListView::Players(rows)
}
