use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://dict.youdao.com/jsonapi".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_example_count() -> usize {
    3
}

fn default_user_agent() -> String {
    format!("dict/{}", env!("CARGO_PKG_VERSION"))
}

/// Lookup settings. The defaults are the only values the binary uses.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Dictionary endpoint, the word is sent as the `q` parameter
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Max example sentences to show
    #[serde(default = "default_example_count")]
    pub example_count: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same settings against another endpoint
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
            example_count: default_example_count(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.api_url, "https://dict.youdao.com/jsonapi");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.example_count, 3);
        assert!(config.user_agent.starts_with("dict/"));
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"api_url": "http://127.0.0.1:9/jsonapi"}"#).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:9/jsonapi");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.example_count, 3);
    }

    #[test]
    fn test_with_api_url() {
        let config = Config::with_api_url("http://localhost:1234/jsonapi");
        assert_eq!(config.api_url, "http://localhost:1234/jsonapi");
        assert_eq!(config.timeout_seconds, 10);
    }
}
