use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_ORIGIN: &str = "https://www.britannica.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; britannica-dict/0.1)";
const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

/// Settings for a [`Dictionary`](crate::Dictionary) client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host every request URL is built on, without a trailing slash.
    pub origin: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Bodies larger than this many bytes are rejected.
    pub max_response_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_response_size: MAX_RESPONSE_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Check the origin and return it with any trailing slashes removed.
    pub(crate) fn normalized_origin(&self) -> Result<String> {
        let trimmed = self.origin.trim_end_matches('/');
        let parsed =
            Url::parse(trimmed).map_err(|e| Error::InvalidOrigin(format!("{trimmed}: {e}")))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::InvalidOrigin(format!(
                "{trimmed}: unsupported scheme {}",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(Error::InvalidOrigin(format!("{trimmed}: missing host")));
        }
        if parsed.path() != "/" || parsed.query().is_some() {
            return Err(Error::InvalidOrigin(format!(
                "{trimmed}: origin must not carry a path or query"
            )));
        }

        Ok(trimmed.to_string())
    }
}
