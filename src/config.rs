use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    // HTTPS listener
    pub bind_address: String,
    pub port: u16,
    pub tls_cert_path: String,
    pub tls_key_path: String,
    pub content_root: String,

    // Remote status/avatar APIs
    pub server_address: String,
    pub status_api_base: String,
    pub avatar_api_base: String,
    pub avatar_size: u32,

    // Poll cadence and failure handling
    pub status_poll_secs: u64,
    pub player_poll_millis: u64,
    pub request_timeout_secs: u64,
    pub max_backoff_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 6987,
            tls_cert_path: "cert.pem".to_string(),
            tls_key_path: "key.pem".to_string(),
            content_root: "site".to_string(),
            server_address: "play.crystalcraftbd.fun".to_string(),
            status_api_base: "https://api.mcsrvstat.us/2".to_string(),
            avatar_api_base: "https://mc-heads.net/avatar".to_string(),
            avatar_size: 32,
            status_poll_secs: 10,
            player_poll_millis: 1000,
            request_timeout_secs: 5,
            max_backoff_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),

            tls_cert_path: env::var("TLS_CERT_PATH").unwrap_or(defaults.tls_cert_path),

            tls_key_path: env::var("TLS_KEY_PATH").unwrap_or(defaults.tls_key_path),

            content_root: env::var("CONTENT_ROOT").unwrap_or(defaults.content_root),

            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),

            status_api_base: env::var("STATUS_API_BASE").unwrap_or(defaults.status_api_base),

            avatar_api_base: env::var("AVATAR_API_BASE").unwrap_or(defaults.avatar_api_base),

            avatar_size: env::var("AVATAR_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.avatar_size),

            status_poll_secs: env::var("STATUS_POLL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.status_poll_secs),

            player_poll_millis: env::var("PLAYER_POLL_MILLIS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.player_poll_millis),

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),

            max_backoff_secs: env::var("MAX_BACKOFF_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_backoff_secs),
        }
    }

    /// Full URL of the status endpoint for the configured server address.
    pub fn status_url(&self) -> String {
        format!("{}/{}", self.status_api_base, self.server_address)
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_secs(self.status_poll_secs)
    }

    pub fn player_interval(&self) -> Duration {
        Duration::from_millis(self.player_poll_millis)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_secs(self.max_backoff_secs)
    }
}
