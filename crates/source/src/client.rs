use std::time::Duration;

use async_trait::async_trait;
use goal_lookup_core::GoalBook;

use crate::GoalSource;
use crate::error::SourceError;
use crate::parse::parse_goals;

/// Maximum length of an upstream error body kept in [`SourceError::HttpStatus`].
pub const MAX_ERROR_BODY_LEN: usize = 200;

/// Loads goals from a CSV export served over HTTP.
///
/// Every call performs a fresh GET; nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpGoalSource {
    client: reqwest::Client,
    url: String,
}

impl HttpGoalSource {
    /// Creates a source for the given CSV export URL.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(url: String, timeout: Option<Duration>) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| SourceError::ClientInit(e.to_string()))?;
        Ok(Self { client, url })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(SourceError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl GoalSource for HttpGoalSource {
    async fn load_goals(&self) -> Result<GoalBook, SourceError> {
        tracing::debug!(url = %self.url, "fetching goal sheet");
        let text = self.fetch_text().await?;
        parse_goals(&text)
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
