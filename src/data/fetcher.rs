use reqwest::Client;
use thiserror::Error;

use crate::models::QuestionBatch;

/// Why a batch could not be fetched. Neither kind is fatal to a session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("could not reach the trivia API: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected response from the trivia API: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Issues one GET per call against a fixed batch URL.
#[derive(Debug, Clone)]
pub struct QuestionFetcher {
    client: Client,
    url: String,
}

impl QuestionFetcher {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode one batch.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` when the request fails or the server
    /// answers with a non-success status, and `FetchError::Decode` when the
    /// body does not have the expected shape.
    pub async fn fetch(&self) -> Result<QuestionBatch, FetchError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_batch(&body)
    }
}

/// Decode a response body into a batch.
pub fn decode_batch(body: &str) -> Result<QuestionBatch, FetchError> {
    Ok(serde_json::from_str(body)?)
}
