//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::{ClientError, ClientResult};

/// Backend address the roster pages were built against
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Delay before navigating away after a successful add/update
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;

/// Client configuration for connecting to the roster backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://127.0.0.1:8000")
    pub base_url: String,

    /// Request timeout in seconds. `None` lets requests run to completion.
    pub timeout: Option<u64>,

    /// Delay before a scheduled navigation fires, in milliseconds
    pub redirect_delay_ms: u64,

    /// Session file used by [`crate::FileStore`]
    pub session_path: PathBuf,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            session_path: PathBuf::from("./data/session.json"),
        }
    }

    /// Build from `.env` / environment, falling back to defaults.
    ///
    /// Reads `ROSTER_BASE_URL`, `ROSTER_TIMEOUT_SECS`,
    /// `ROSTER_REDIRECT_DELAY_MS` and `ROSTER_SESSION_PATH`.
    pub fn from_env() -> ClientResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; malformed numbers are a
    /// [`ClientError::Config`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup("ROSTER_BASE_URL").unwrap_or_else(|| {
            tracing::debug!("ROSTER_BASE_URL not set, using {}", DEFAULT_BASE_URL);
            DEFAULT_BASE_URL.to_string()
        });
        let mut config = Self::new(base_url);

        if let Some(secs) = lookup("ROSTER_TIMEOUT_SECS") {
            let secs = secs
                .parse()
                .map_err(|_| ClientError::Config(format!("invalid ROSTER_TIMEOUT_SECS: {secs}")))?;
            config = config.with_timeout(secs);
        }
        if let Some(ms) = lookup("ROSTER_REDIRECT_DELAY_MS") {
            let ms = ms.parse().map_err(|_| {
                ClientError::Config(format!("invalid ROSTER_REDIRECT_DELAY_MS: {ms}"))
            })?;
            config = config.with_redirect_delay_ms(ms);
        }
        if let Some(path) = lookup("ROSTER_SESSION_PATH") {
            config = config.with_session_path(path);
        }

        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the post-success navigation delay
    pub fn with_redirect_delay_ms(mut self, ms: u64) -> Self {
        self.redirect_delay_ms = ms;
        self
    }

    /// Set the session file location
    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
