//! Configuration for the downloader module.

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP video downloader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloaderConfig {
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 {
    600 // 10 minutes; bounded by media size and network conditions
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("clipkit/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl DownloaderConfig {
    /// Sets the total request timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
