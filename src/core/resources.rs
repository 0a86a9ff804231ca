//! Client settings
//!
//! Every field has a default so a partial `settings.json` still loads.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// API root used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Poll period used when nothing else is configured
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Environment variable overriding [`ClientSettings::api_base_url`]
pub const API_URL_ENV: &str = "SHADOWCHESS_API_URL";

/// User-tunable client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Root of the game API, without the `/game/...` suffix
    pub api_base_url: String,

    /// Milliseconds between state polls
    pub poll_interval_ms: u64,

    /// Whether to outline the squares of the last accepted move
    pub highlight_last_move: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            highlight_last_move: true,
        }
    }
}

impl ClientSettings {
    /// Poll period, never shorter than 100 ms
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(100))
    }

    /// Replace the API root when `value` is present and not blank
    pub fn with_api_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::default();
        assert_eq!(settings.api_base_url, "http://localhost:5000/api");
        assert_eq!(settings.poll_interval(), Duration::from_secs(2));
        assert!(settings.highlight_last_move);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{"poll_interval_ms": 500}"#).unwrap();
        assert_eq!(settings.poll_interval_ms, 500);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_poll_interval_floor() {
        let settings = ClientSettings {
            poll_interval_ms: 0,
            ..ClientSettings::default()
        };
        assert_eq!(settings.poll_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_api_override() {
        let settings = ClientSettings::default()
            .with_api_override(Some(" http://example.test/api ".to_string()));
        assert_eq!(settings.api_base_url, "http://example.test/api");

        let settings = ClientSettings::default().with_api_override(Some("  ".to_string()));
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    }
}
