//! Shared application state handed to both protocol front ends.

use std::sync::Arc;

use relaydir_persistence::DirectoryRepository;

use crate::auth::TokenVerifier;
use crate::model::config::Configuration;
use crate::service::directory::DirectoryService;
use crate::service::ingest::IngestionJob;
use crate::service::receipt::ReceiptVerifier;

pub struct AppState {
    pub configuration: Configuration,
    pub repository: Arc<dyn DirectoryRepository>,
    pub verifier: Arc<TokenVerifier>,
    pub directory: DirectoryService,
    pub ingestion: Arc<IngestionJob>,
    pub receipt: ReceiptVerifier,
}
