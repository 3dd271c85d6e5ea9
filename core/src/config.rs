//! Client configuration: the base URL and the transport timeout.
//!
//! `ClientConfig` deserializes from `{"base_url": ..., "timeout_secs": ...}`;
//! an omitted timeout falls back to [`DEFAULT_TIMEOUT`].

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Per-request timeout enforced by the transport when the caller's context
/// carries no earlier deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Path appended to the base API URL to reach the accounts collection.
pub const ACCOUNTS_PATH: &str = "/organisation/accounts";

/// Client configuration. Deserializable so it can be embedded in a caller's
/// own config file:
///
/// ```toml
/// base_url = "http://localhost:8080/v1"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        deserialize_with = "duration_from_secs"
    )]
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn duration_from_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_sixty_seconds() {
        assert_eq!(ClientConfig::new("http://x").timeout, Duration::from_secs(60));
    }

    #[test]
    fn deserializes_with_and_without_timeout() {
        let cfg: ClientConfig = serde_json::from_str(r#"{"base_url":"http://x"}"#).unwrap();
        assert_eq!(cfg, ClientConfig::new("http://x"));

        let cfg: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://x","timeout_secs":5}"#).unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }
}
