// src/models/status.rs
use serde::{Deserialize, Serialize};

/// Response shape of the public status API (`GET <base>/<server-address>`).
/// Fields beyond these are ignored; `players` and `players.list` are omitted
/// by the API when the server is offline or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub online: bool,
    #[serde(default)]
    pub players: Option<PlayerSample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSample {
    pub online: u32,
    pub max: u32,
    #[serde(default)]
    pub list: Option<Vec<String>>,
}

impl StatusResponse {
    /// Player names in API order, empty when absent.
    pub fn player_names(&self) -> &[String] {
        self.players
            .as_ref()
            .and_then(|p| p.list.as_deref())
            .unwrap_or(&[])
    }
}
