//! HTTP client for the Datamuse `/words` endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::DatamuseConfig;
use crate::error::{Error, Result};
use crate::words::{Relation, WordEntry};

/// Fetches word lists from Datamuse.
///
/// One request per lookup; failures are returned to the caller as-is.
#[derive(Clone, Debug)]
pub struct DatamuseClient {
    client: Client,
    config: DatamuseConfig,
}

impl DatamuseClient {
    pub fn new(config: DatamuseConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DatamuseConfig {
        &self.config
    }

    pub async fn rhymes(&self, word: &str) -> Result<Vec<WordEntry>> {
        self.lookup(Relation::Rhyme, word).await
    }

    pub async fn similar(&self, word: &str) -> Result<Vec<WordEntry>> {
        self.lookup(Relation::MeansLike, word).await
    }

    /// Requests the words related to `word` by `relation`.
    pub async fn lookup(&self, relation: Relation, word: &str) -> Result<Vec<WordEntry>> {
        let url = self.config.query_url(relation, word)?;
        info!(%relation, word, "querying Datamuse");
        debug!(%url, "sending request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("failed to read response from {url}: {e}")))?;

        let entries: Vec<WordEntry> = serde_json::from_slice(&body)
            .map_err(|e| Error::Deserialization(format!("expected a list of words: {e}")))?;

        debug!(count = entries.len(), "received words");
        Ok(entries)
    }
}
