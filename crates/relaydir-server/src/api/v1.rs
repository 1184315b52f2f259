//! HTTP/JSON front end.
//!
//! Routes mirror the gRPC surface one-to-one and share the same service
//! layer, auth rules and error classification. `GET /v1/version` and
//! `GET /v1/healthz` are open; everything else requires a verified bearer
//! credential.

use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use relaydir_api::API_VERSION;
use relaydir_persistence::{CountryInfo, JoinedServer, ServerRecord};

use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::model::common::AppState;
use crate::service::rpc::RELEASE;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CountryDto {
    id: i32,
    name: String,
    code: String,
}

impl From<CountryInfo> for CountryDto {
    fn from(country: CountryInfo) -> Self {
        Self {
            id: country.id,
            name: country.name,
            code: country.code,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VpnServerDto {
    id: i32,
    host_name: String,
    ip: String,
    score: i32,
    ping: i32,
    speed: i64,
    country: CountryDto,
    num_vpn_sessions: i32,
    uptime: i64,
    total_users: i32,
    total_traffic: i64,
    log_type: String,
    operator: String,
    message: String,
    open_vpn_config: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl From<JoinedServer> for VpnServerDto {
    fn from(server: JoinedServer) -> Self {
        Self {
            id: server.id,
            host_name: server.host_name,
            ip: server.ip,
            score: server.score,
            ping: server.ping,
            speed: server.speed,
            country: server.country.into(),
            num_vpn_sessions: server.num_vpn_sessions,
            uptime: server.uptime,
            total_users: server.total_users,
            total_traffic: server.total_traffic,
            log_type: server.log_type,
            operator: server.operator,
            message: server.message,
            open_vpn_config: server.open_vpn_config,
            created_at: Some(server.created_at),
            updated_at: Some(server.updated_at),
        }
    }
}

impl From<ServerRecord> for VpnServerDto {
    fn from(record: ServerRecord) -> Self {
        Self {
            id: 0,
            host_name: record.host_name,
            ip: record.ip,
            score: record.score,
            ping: record.ping,
            speed: record.speed,
            country: CountryDto {
                id: 0,
                name: record.country_name,
                code: record.country_code,
            },
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
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionBody {
    api: String,
    release: String,
    commit: String,
    build_time: String,
}

#[derive(Debug, Serialize)]
struct ApiBody {
    api: String,
}

#[derive(Debug, Serialize)]
struct ListBody<T> {
    api: String,
    data: Vec<T>,
}

fn require_auth(ctx: Option<web::ReqData<AuthContext>>) -> Result<(), AppError> {
    match ctx {
        Some(ctx) if ctx.authenticated => Ok(()),
        _ => Err(AppError::CredentialInvalid),
    }
}

#[get("/version")]
async fn version() -> impl Responder {
    HttpResponse::Ok().json(VersionBody {
        api: API_VERSION.to_string(),
        release: RELEASE.to_string(),
        commit: option_env!("RELAYDIR_COMMIT").unwrap_or("").to_string(),
        build_time: option_env!("RELAYDIR_BUILD_TIME").unwrap_or("").to_string(),
    })
}

#[get("/healthz")]
async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(ApiBody {
        api: API_VERSION.to_string(),
    })
}

#[get("/countries")]
async fn list_countries(
    data: web::Data<AppState>,
    ctx: Option<web::ReqData<AuthContext>>,
) -> Result<HttpResponse, AppError> {
    require_auth(ctx)?;
    let countries = data.directory.list_countries().await?;
    Ok(HttpResponse::Ok().json(ListBody {
        api: API_VERSION.to_string(),
        data: countries.into_iter().map(CountryDto::from).collect::<Vec<_>>(),
    }))
}

#[derive(Debug, Deserialize)]
struct ListServersQuery {
    country_code: Option<String>,
}

#[get("/vpnservers")]
async fn list_vpn_servers(
    data: web::Data<AppState>,
    query: web::Query<ListServersQuery>,
    ctx: Option<web::ReqData<AuthContext>>,
) -> Result<HttpResponse, AppError> {
    require_auth(ctx)?;
    let servers = data
        .directory
        .list_servers(query.country_code.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(ListBody {
        api: API_VERSION.to_string(),
        data: servers
            .into_iter()
            .map(VpnServerDto::from)
            .collect::<Vec<_>>(),
    }))
}

#[post("/crawler")]
async fn trigger_ingestion(
    data: web::Data<AppState>,
    ctx: Option<web::ReqData<AuthContext>>,
) -> Result<HttpResponse, AppError> {
    require_auth(ctx)?;
    let ingested = data.ingestion.run().await?;
    Ok(HttpResponse::Ok().json(ListBody {
        api: API_VERSION.to_string(),
        data: ingested
            .into_iter()
            .map(|r| VpnServerDto::from(r.record))
            .collect::<Vec<_>>(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyReceiptBody {
    receipt_data: String,
}

#[post("/receipt/verify")]
async fn verify_receipt(
    data: web::Data<AppState>,
    body: web::Json<VerifyReceiptBody>,
    ctx: Option<web::ReqData<AuthContext>>,
) -> Result<HttpResponse, AppError> {
    require_auth(ctx)?;
    let receipt = BASE64
        .decode(body.receipt_data.as_bytes())
        .map_err(|_| AppError::ReceiptRejected(21002))?;
    data.receipt.verify(&receipt).await?;
    Ok(HttpResponse::Ok().json(ApiBody {
        api: API_VERSION.to_string(),
    }))
}

pub fn routes() -> Scope {
    web::scope("/v1")
        .service(version)
        .service(healthz)
        .service(list_countries)
        .service(list_vpn_servers)
        .service(trigger_ingestion)
        .service(verify_receipt)
}
