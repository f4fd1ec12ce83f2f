// src/sync/poller.rs
//! The two recurring schedules. Each tick is an isolated unit of work:
//! fetch, derive the view-state, reconcile. A failed tick renders the
//! sentinel/failure view and never cancels the schedule.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use rand::Rng;

use crate::config::Config;
use crate::sync::client::StatusClient;
use crate::sync::dom::Document;
use crate::sync::render;
use crate::sync::view::{self, PlayerListView, StatusView};

/// Recency guard for overlapping ticks. A tick takes its sequence number at
/// request start; a completed tick may apply its result only if nothing
/// newer has applied already, so a slow response can never clobber fresher
/// data.
#[derive(Default)]
pub struct TickGate {
    next_seq: AtomicU64,
    last_applied: AtomicU64,
}

impl TickGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next tick's sequence number (1-based).
    pub fn begin(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// True if this tick is the newest to finish so far and may apply.
    pub fn try_apply(&self, seq: u64) -> bool {
        self.last_applied.fetch_max(seq, Ordering::AcqRel) < seq
    }
}

/// Delay until the next tick: the base interval normally, stretched
/// exponentially (with jitter, capped) after consecutive failures so a dead
/// remote API is not hammered at full cadence.
pub fn backoff_delay(base: Duration, consecutive_failures: u32, cap: Duration) -> Duration {
    if consecutive_failures == 0 {
        return base;
    }
    let exp = consecutive_failures.min(10);
    let stretched = base
        .saturating_mul(2u32.saturating_pow(exp))
        .min(cap)
        .max(base);
    let jitter_ms = rand::thread_rng().gen_range(0..=stretched.as_millis() as u64 / 4);
    stretched + Duration::from_millis(jitter_ms)
}

/// Feeds the status widgets. Reference cadence: every 10 seconds.
pub struct StatusPoller {
    client: StatusClient,
    doc: Arc<Document>,
    interval: Duration,
    max_backoff: Duration,
    gate: TickGate,
    failures: AtomicU32,
}

impl StatusPoller {
    pub fn new(
        client: StatusClient,
        doc: Arc<Document>,
        interval: Duration,
        max_backoff: Duration,
    ) -> Self {
        Self {
            client,
            doc,
            interval,
            max_backoff,
            gate: TickGate::new(),
            failures: AtomicU32::new(0),
        }
    }

    pub fn from_config(config: &Config, doc: Arc<Document>) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            StatusClient::from_config(config)?,
            doc,
            config.status_interval(),
            config.max_backoff(),
        ))
    }

    /// One tick. Returns true on a successful fetch.
    pub async fn tick(&self) -> bool {
        let seq = self.gate.begin();
        let (view, ok) = match self.client.fetch_status().await {
            Ok((resp, latency)) => (view::status_view(&resp, latency), true),
            Err(e) => {
                warn!("status poll failed: {}", e);
                (StatusView::Unknown, false)
            }
        };
        if ok {
            self.failures.store(0, Ordering::Relaxed);
        } else {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
        if self.gate.try_apply(seq) {
            render::render_status(&self.doc, &view);
        } else {
            debug!("discarding stale status tick {}", seq);
        }
        ok
    }

    /// Fires immediately, then keeps its own schedule forever. Ticks are
    /// fire-and-forget; the gate keeps late responses from going backwards.
    pub async fn run(self: Arc<Self>) {
        loop {
            let poller = Arc::clone(&self);
            tokio::spawn(async move {
                poller.tick().await;
            });
            let failures = self.failures.load(Ordering::Relaxed);
            tokio::time::sleep(backoff_delay(self.interval, failures, self.max_backoff)).await;
        }
    }
}

/// Feeds the live player list. Reference cadence: every second; kept
/// configurable because it trades directly against remote API rate limits.
pub struct PlayerListPoller {
    client: StatusClient,
    doc: Arc<Document>,
    avatar_base: String,
    avatar_size: u32,
    interval: Duration,
    max_backoff: Duration,
    gate: TickGate,
    failures: AtomicU32,
}

impl PlayerListPoller {
    pub fn new(
        client: StatusClient,
        doc: Arc<Document>,
        avatar_base: String,
        avatar_size: u32,
        interval: Duration,
        max_backoff: Duration,
    ) -> Self {
        Self {
            client,
            doc,
            avatar_base,
            avatar_size,
            interval,
            max_backoff,
            gate: TickGate::new(),
            failures: AtomicU32::new(0),
        }
    }

    pub fn from_config(config: &Config, doc: Arc<Document>) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            StatusClient::from_config(config)?,
            doc,
            config.avatar_api_base.clone(),
            config.avatar_size,
            config.player_interval(),
            config.max_backoff(),
        ))
    }

    pub async fn tick(&self) -> bool {
        let seq = self.gate.begin();
        let (view, ok) = match self.client.fetch_status().await {
            Ok((resp, _latency)) => (
                view::player_list_view(&resp, &self.avatar_base, self.avatar_size),
                true,
            ),
            Err(e) => {
                warn!("player list poll failed: {}", e);
                (PlayerListView::Unavailable, false)
            }
        };
        if ok {
            self.failures.store(0, Ordering::Relaxed);
        } else {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
        if self.gate.try_apply(seq) {
            render::render_player_list(&self.doc, &view);
        } else {
            debug!("discarding stale player list tick {}", seq);
        }
        ok
    }

    pub async fn run(self: Arc<Self>) {
        loop {
            let poller = Arc::clone(&self);
            tokio::spawn(async move {
                poller.tick().await;
            });
            let failures = self.failures.load(Ordering::Relaxed);
            tokio::time::sleep(backoff_delay(self.interval, failures, self.max_backoff)).await;
        }
    }
}
