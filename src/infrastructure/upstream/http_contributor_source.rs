use crate::domain::contributor::{
    entity::ContributorRecord, errors::DomainError, repository::ContributorSource,
};
use async_trait::async_trait;
use reqwest::{StatusCode, header::USER_AGENT};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream responded with status {0}")]
    Status(StatusCode),
    #[error("invalid contributor payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<FetchError> for DomainError {
    fn from(err: FetchError) -> Self {
        DomainError::UpstreamFetch(err.to_string())
    }
}

/// Reads the contributor list from a remote JSON document over HTTP.
pub struct HttpContributorSource {
    client: reqwest::Client,
    url: String,
    user_agent: String,
}

impl HttpContributorSource {
    pub fn new(url: String, timeout: Duration, user_agent: String) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            user_agent,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_records(&self) -> Result<Vec<ContributorRecord>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        decode_document(&body)
    }
}

/// The whole document must decode; one bad entry fails the fetch.
pub fn decode_document(body: &[u8]) -> Result<Vec<ContributorRecord>, FetchError> {
    Ok(serde_json::from_slice::<Vec<ContributorRecord>>(body)?)
}

#[async_trait]
impl ContributorSource for HttpContributorSource {
    async fn fetch_all(&self) -> Result<Vec<ContributorRecord>, DomainError> {
        let records = self.fetch_records().await.map_err(|err| {
            tracing::warn!(url = %self.url, error = %err, "contributor fetch failed");
            err
        })?;

        Ok(records)
    }
}
