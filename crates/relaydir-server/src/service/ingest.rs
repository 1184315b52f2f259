//! Full-refresh ingestion of the upstream relay feed.
//!
//! A cycle is fetch, parse, truncate, repopulate. The truncate is the point
//! of no return: a fetch problem aborts the cycle with the old directory
//! intact, while per-record persistence failures after the truncate are
//! logged and skipped so one bad row cannot starve the rest of the feed.

use std::sync::Arc;
use std::time::Duration;

use relaydir_persistence::{DirectoryRepository, ServerRecord};
use tracing::{info, warn};

use crate::error::AppError;
use crate::feed;

/// What happened to a single feed record during repopulation.
#[derive(Debug, PartialEq)]
pub enum RecordOutcome {
    Inserted,
    Failed(String),
}

/// One feed record together with its persistence outcome. A manual trigger
/// reports the full cycle back to the caller, failed records included.
#[derive(Debug)]
pub struct IngestedRecord {
    pub record: ServerRecord,
    pub outcome: RecordOutcome,
}

pub struct IngestionJob {
    repository: Arc<dyn DirectoryRepository>,
    http: reqwest::Client,
    feed_url: String,
}

impl IngestionJob {
    pub fn new(
        repository: Arc<dyn DirectoryRepository>,
        feed_url: String,
        fetch_timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(fetch_timeout)
            .build()
            .map_err(|e| AppError::Unknown(e.to_string()))?;
        Ok(Self {
            repository,
            http,
            feed_url,
        })
    }

    /// Runs one full ingestion cycle against the upstream feed.
    pub async fn run(&self) -> Result<Vec<IngestedRecord>, AppError> {
        let body = self.fetch().await?;
        self.ingest_body(&body).await
    }

    async fn fetch(&self) -> Result<Vec<u8>, AppError> {
        let response = self
            .http
            .get(&self.feed_url)
            .send()
            .await
            .map_err(|e| AppError::UpstreamFetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(AppError::UpstreamFetch(format!(
                "feed returned status {}",
                response.status()
            )));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::UpstreamFetch(e.to_string()))?;
        Ok(body.to_vec())
    }

    /// Replaces the directory with the content of an already-fetched feed
    /// body. A truncate failure aborts before any row is written.
    pub async fn ingest_body(&self, body: &[u8]) -> Result<Vec<IngestedRecord>, AppError> {
        self.repository.truncate_servers().await?;

        let mut results = Vec::new();
        for record in feed::parse(body) {
            let outcome = match self.persist(&record).await {
                Ok(()) => RecordOutcome::Inserted,
                Err(err) => {
                    warn!(
                        host_name = %record.host_name,
                        country_code = %record.country_code,
                        error = %err,
                        "skipping feed record"
                    );
                    RecordOutcome::Failed(err.to_string())
                }
            };
            results.push(IngestedRecord { record, outcome });
        }

        let inserted = results
            .iter()
            .filter(|r| r.outcome == RecordOutcome::Inserted)
            .count();
        info!(
            inserted = inserted,
            failed = results.len() - inserted,
            "ingestion cycle complete"
        );
        Ok(results)
    }

    async fn persist(&self, record: &ServerRecord) -> Result<(), AppError> {
        let country_id = self
            .repository
            .create_country(&record.country_name, &record.country_code)
            .await?;
        self.repository.create_server(record, country_id).await?;
        Ok(())
    }
}
