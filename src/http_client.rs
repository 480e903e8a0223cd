use reqwest::Client;
use scraper::Html;
use thiserror::Error;

use crate::config::ClientConfig;

/// Thin wrapper over `reqwest::Client` that only knows how to GET a page
/// and hand back its HTML.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_response_size: usize,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            max_response_size: config.max_response_size,
        })
    }

    /// GET `url` and return the body as text. Any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "fetching page");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_response_size as u64 {
                return Err(FetchError::TooLarge(content_length));
            }
        }

        // Decoded with the charset the response declares, UTF-8 otherwise.
        let body = response.text().await?;
        if body.len() > self.max_response_size {
            return Err(FetchError::TooLarge(body.len() as u64));
        }

        Ok(body)
    }

    /// GET `url` and parse the body leniently into an HTML tree.
    pub async fn fetch_document(&self, url: &str) -> Result<Html, FetchError> {
        let body = self.fetch(url).await?;
        Ok(Html::parse_document(&body))
    }
}

/// Transport failures of a single fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("response too large: {0} bytes")]
    TooLarge(u64),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}
