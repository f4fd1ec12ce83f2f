// src/sync/client.rs
use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::config::Config;
use crate::models::status::StatusResponse;

/// One failure type for the whole poll round; the pollers treat transport
/// errors, bad statuses and malformed bodies identically.
#[derive(Debug)]
pub enum FetchError {
    Transport(reqwest::Error),
    HttpStatus(u16),
    Decode(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "status request failed: {}", e),
            Self::HttpStatus(code) => write!(f, "status API returned HTTP {}", code),
            Self::Decode(e) => write!(f, "status API body was not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Client for the public status endpoint. Carries an explicit per-request
/// timeout so a hung remote cannot stall a poller indefinitely.
#[derive(Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    url: String,
}

impl StatusClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(config.status_url(), config.request_timeout())
    }

    /// One GET of the status endpoint. The returned duration is wall-clock
    /// from request start to decoded body, i.e. this round's observed
    /// latency, not the game server's ping.
    pub async fn fetch_status(&self) -> Result<(StatusResponse, Duration), FetchError> {
        let started = Instant::now();
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .json::<StatusResponse>()
            .await
            .map_err(FetchError::Decode)?;
        let latency = started.elapsed();
        debug!("status poll of {} answered in {:?}", self.url, latency);
        Ok((body, latency))
    }
}
