//! gRPC front end implementing the `relaydir.v1.VpnDirectory` service.
//!
//! Every method except `Version` and `Healthz` requires a valid credential
//! in the `authorization` metadata entry. Handlers delegate to the shared
//! service layer, so the HTTP front end observes identical semantics.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use relaydir_api::v1;
use relaydir_persistence::{CountryInfo, JoinedServer, ServerRecord};

use crate::auth::TokenVerifier;
use crate::model::common::AppState;

pub const RELEASE: &str = env!("CARGO_PKG_VERSION");

fn to_proto_country(country: CountryInfo) -> v1::Country {
    v1::Country {
        id: country.id,
        name: country.name,
        code: country.code,
    }
}

fn to_timestamp(dt: chrono::DateTime<chrono::Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

fn to_proto_server(server: JoinedServer) -> v1::VpnServer {
    v1::VpnServer {
        id: server.id,
        host_name: server.host_name,
        ip: server.ip,
        score: server.score,
        ping: server.ping,
        speed: server.speed,
        country: Some(to_proto_country(server.country)),
        num_vpn_sessions: server.num_vpn_sessions,
        uptime: server.uptime,
        total_users: server.total_users,
        total_traffic: server.total_traffic,
        log_type: server.log_type,
        operator: server.operator,
        message: server.message,
        open_vpn_config: server.open_vpn_config,
        created_at: Some(to_timestamp(server.created_at)),
        updated_at: Some(to_timestamp(server.updated_at)),
    }
}

/// A freshly ingested record has no surrogate id or timestamps yet; the
/// country is echoed back by name and code only.
fn to_proto_ingested(record: ServerRecord) -> v1::VpnServer {
    v1::VpnServer {
        id: 0,
        host_name: record.host_name,
        ip: record.ip,
        score: record.score,
        ping: record.ping,
        speed: record.speed,
        country: Some(v1::Country {
            id: 0,
            name: record.country_name,
            code: record.country_code,
        }),
        num_vpn_sessions: record.num_vpn_sessions,
        uptime: record.uptime,
        total_users: record.total_users,
        total_traffic: record.total_traffic,
        log_type: record.log_type,
        operator: record.operator,
        message: record.message,
        open_vpn_config: record.open_vpn_config,
        created_at: None,
        updated_at: None,
    }
}

pub struct VpnDirectoryService {
    state: Arc<AppState>,
}

impl VpnDirectoryService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    fn verifier(&self) -> &TokenVerifier {
        &self.state.verifier
    }

    fn authorize<T>(&self, request: &Request<T>) -> Result<(), Status> {
        self.verifier()
            .verify_grpc(request.metadata())
            .map(|_| ())
            .map_err(Status::from)
    }
}

#[tonic::async_trait]
impl v1::vpn_directory_server::VpnDirectory for VpnDirectoryService {
    async fn version(
        &self,
        _request: Request<v1::VersionRequest>,
    ) -> Result<Response<v1::VersionResponse>, Status> {
        Ok(Response::new(v1::VersionResponse {
            api: relaydir_api::API_VERSION.to_string(),
            release: RELEASE.to_string(),
            commit: option_env!("RELAYDIR_COMMIT").unwrap_or("").to_string(),
            build_time: option_env!("RELAYDIR_BUILD_TIME").unwrap_or("").to_string(),
        }))
    }

    async fn healthz(
        &self,
        _request: Request<v1::HealthzRequest>,
    ) -> Result<Response<v1::HealthzResponse>, Status> {
        Ok(Response::new(v1::HealthzResponse {
            api: relaydir_api::API_VERSION.to_string(),
        }))
    }

    async fn list_countries(
        &self,
        request: Request<v1::ListCountriesRequest>,
    ) -> Result<Response<v1::ListCountriesResponse>, Status> {
        self.authorize(&request)?;
        let countries = self.state.directory.list_countries().await?;
        Ok(Response::new(v1::ListCountriesResponse {
            api: relaydir_api::API_VERSION.to_string(),
            data: countries.into_iter().map(to_proto_country).collect(),
        }))
    }

    async fn list_vpn_servers(
        &self,
        request: Request<v1::ListVpnServersRequest>,
    ) -> Result<Response<v1::ListVpnServersResponse>, Status> {
        self.authorize(&request)?;
        let country_code = request.get_ref().country_code.as_str();
        let filter = (!country_code.is_empty()).then_some(country_code);
        let servers = self.state.directory.list_servers(filter).await?;
        Ok(Response::new(v1::ListVpnServersResponse {
            api: relaydir_api::API_VERSION.to_string(),
            data: servers.into_iter().map(to_proto_server).collect(),
        }))
    }

    async fn trigger_ingestion(
        &self,
        request: Request<v1::TriggerIngestionRequest>,
    ) -> Result<Response<v1::TriggerIngestionResponse>, Status> {
        self.authorize(&request)?;
        let ingested = self.state.ingestion.run().await?;
        Ok(Response::new(v1::TriggerIngestionResponse {
            api: relaydir_api::API_VERSION.to_string(),
            data: ingested
                .into_iter()
                .map(|r| to_proto_ingested(r.record))
                .collect(),
        }))
    }

    async fn verify_receipt(
        &self,
        request: Request<v1::VerifyReceiptRequest>,
    ) -> Result<Response<v1::VerifyReceiptResponse>, Status> {
        self.authorize(&request)?;
        self.state
            .receipt
            .verify(&request.get_ref().receipt_data)
            .await?;
        Ok(Response::new(v1::VerifyReceiptResponse {
            api: relaydir_api::API_VERSION.to_string(),
        }))
    }
}
