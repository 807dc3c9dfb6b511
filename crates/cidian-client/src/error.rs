use std::error::Error as StdError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {}", error_chain(.0))]
    Network(#[from] reqwest::Error),

    #[error("Network error: HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to parse API response")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Failed to build HTTP client: {}", error_chain(.0))]
    Client(#[source] reqwest::Error),

    #[error("Invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    /// True when the server answered but the body was not JSON
    pub fn is_parse_error(&self) -> bool {
        matches!(self, FetchError::InvalidJson(_))
    }
}

/// reqwest keeps the interesting part (refused, timed out, dns) in the source chain
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
