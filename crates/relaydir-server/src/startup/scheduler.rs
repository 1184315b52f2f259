//! Periodic ingestion scheduler.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{error, info};

use crate::service::ingest::IngestionJob;

/// Spawns the periodic ingestion loop.
///
/// The first cycle runs immediately on startup so the directory is populated
/// without waiting a full interval. A failed cycle is logged and the loop
/// keeps its cadence; there is no backoff because the interval already
/// bounds the retry rate.
pub fn start_scheduler(
    ingestion: Arc<IngestionJob>,
    interval: Duration,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> tokio::task::JoinHandle<()> {
    info!(interval_secs = interval.as_secs(), "Starting ingestion scheduler");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = ingestion.run().await {
                        error!(error = %e, "scheduled ingestion cycle failed");
                    }
                }
                _ = shutdown_rx.recv() => {
                    info!("Ingestion scheduler shutting down");
                    break;
                }
            }
        }
    })
}
