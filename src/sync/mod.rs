//! The client sync controller: independently scheduled polling loops that
//! fetch the remote status resource and reconcile it into the page, plus the
//! event-driven widgets (nav, modals, clipboard feedback).

pub mod client;
pub mod clipboard;
pub mod dom;
pub mod feedback;
pub mod poller;
pub mod render;
pub mod toggle;
pub mod view;

use std::sync::Arc;

use crate::config::Config;
use dom::Document;
use poller::{PlayerListPoller, StatusPoller};

/// Page-load wiring: arms both polling schedules (each fires immediately)
/// and reveals the navbar. Event listeners need no arming here; they are
/// plain calls into [`toggle`] and [`clipboard`].
pub fn start(config: &Config, doc: &Arc<Document>) -> Result<(), reqwest::Error> {
    render::reveal_navbar(doc);
    let status = Arc::new(StatusPoller::from_config(config, Arc::clone(doc))?);
    let players = Arc::new(PlayerListPoller::from_config(config, Arc::clone(doc))?);
    tokio::spawn(status.run());
    tokio::spawn(players.run());
    Ok(())
}
