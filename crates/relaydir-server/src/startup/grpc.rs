//! gRPC server setup module.

use std::sync::Arc;

use tracing::info;

use relaydir_api::v1::vpn_directory_server::VpnDirectoryServer;

use crate::{model::common::AppState, service::rpc::VpnDirectoryService};

/// Spawned gRPC server handle.
pub struct GrpcServer {
    _server: tokio::task::JoinHandle<()>,
}

/// Creates and starts the gRPC server for the directory service.
pub fn start_grpc_server(
    app_state: Arc<AppState>,
    port: u16,
) -> Result<GrpcServer, Box<dyn std::error::Error>> {
    let grpc_addr = format!("0.0.0.0:{}", port).parse()?;
    info!("Starting gRPC server on {}", grpc_addr);

    let service = VpnDirectoryService::new(app_state);
    let server = tokio::spawn(async move {
        let result = tonic::transport::Server::builder()
            .add_service(VpnDirectoryServer::new(service))
            .serve(grpc_addr)
            .await;
        if let Err(e) = result {
            tracing::error!("gRPC server error: {}", e);
        }
    });

    Ok(GrpcServer { _server: server })
}
