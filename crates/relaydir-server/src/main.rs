//! Main entry point for the relaydir server.
//!
//! Sets up configuration, logging, storage and the three long-running
//! pieces: the HTTP/JSON server, the gRPC server and the periodic ingestion
//! scheduler.

use std::sync::Arc;

use relaydir_migration::{Migrator, MigratorTrait};
use relaydir_persistence::{
    DirectoryRepository, EmbeddedDirectoryRepository, ExternalDbDirectoryRepository,
};
use relaydir_server::{
    auth::TokenVerifier,
    model::{common::AppState, config::Configuration},
    service::{directory::DirectoryService, ingest::IngestionJob, receipt::ReceiptVerifier},
    startup,
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new();

    let logging_config = startup::LoggingConfig::from_config(
        configuration.log_dir(),
        configuration.log_console_output(),
        configuration.log_file_enabled(),
        configuration.log_level(),
    );
    let _logging_guard = startup::init_logging(&logging_config)?;

    // Storage backend is selected by the database url scheme
    let db = configuration.database_connection().await?;
    Migrator::up(&db, None).await?;

    let repository: Arc<dyn DirectoryRepository> = if configuration.uses_embedded_storage() {
        info!("Using embedded SQLite storage");
        Arc::new(EmbeddedDirectoryRepository::new(db))
    } else {
        info!("Using external database storage");
        Arc::new(ExternalDbDirectoryRepository::new(db))
    };

    let public_key_path = configuration.auth_public_key_path();
    let public_key = std::fs::read(&public_key_path)
        .map_err(|e| format!("Failed to read public key {}: {}", public_key_path, e))?;
    let verifier = Arc::new(TokenVerifier::from_rsa_pem(&public_key)?);

    let directory = DirectoryService::new(repository.clone());
    let ingestion = Arc::new(IngestionJob::new(
        repository.clone(),
        configuration.feed_url(),
        configuration.feed_timeout(),
    )?);
    let receipt = ReceiptVerifier::new(
        configuration.receipt_production_url(),
        configuration.receipt_sandbox_url(),
        configuration.receipt_shared_secret(),
        configuration.receipt_timeout(),
    )?;

    let server_address = configuration.server_address();
    let http_port = configuration.http_port();
    let grpc_port = configuration.grpc_port();
    let feed_interval = configuration.feed_interval();

    let app_state = Arc::new(AppState {
        configuration,
        repository,
        verifier,
        directory,
        ingestion: ingestion.clone(),
        receipt,
    });

    let shutdown_signal = startup::wait_for_shutdown_signal().await;

    let _grpc_server = startup::start_grpc_server(app_state.clone(), grpc_port)?;

    let _scheduler = startup::start_scheduler(ingestion, feed_interval, shutdown_signal.subscribe());

    info!("Starting HTTP server on {}:{}", server_address, http_port);
    let http_server = startup::http_server(app_state, server_address, http_port)?;

    let mut shutdown_rx = shutdown_signal.subscribe();
    tokio::select! {
        result = http_server => {
            if let Err(e) = result {
                error!("HTTP server error: {}", e);
            }
        }
        _ = shutdown_rx.recv() => {
            info!("Shutting down gracefully");
        }
    }

    info!("relaydir server shutdown complete");
    Ok(())
}
