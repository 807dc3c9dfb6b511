use cidian_config::Config;
use reqwest::Url;
use serde_json::Value;

use crate::error::FetchError;

/// Name of the query parameter carrying the word
const QUERY_PARAM: &str = "q";

#[derive(Clone)]
pub struct YoudaoClient {
    base_url: Url,
    client: reqwest::Client,
}

impl YoudaoClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| FetchError::InvalidUrl {
            url: config.api_url.clone(),
            reason: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { base_url, client })
    }

    /// Endpoint with the word appended as a form-encoded query parameter
    pub fn query_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair(QUERY_PARAM, word);
        url
    }

    /// Look up a word, one request, no retries
    pub async fn fetch(&self, word: &str) -> Result<Value, FetchError> {
        let url = self.query_url(word);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Dictionary responded with {}", status);

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(FetchError::InvalidJson)
    }
}
