//! Domain value objects exchanged between the ingestion job, the query
//! service and the repository backends.
//!
//! The write path and the read path use different shapes on purpose: a
//! [`ServerRecord`] is what the feed parser produces (country still a
//! name/code pair, no surrogate ids), while [`JoinedServer`] is the joined
//! read projection served to clients.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::entity::{country, vpn_server};

/// Repository error taxonomy.
///
/// `CountryNotFound` is a distinguished outcome, not a generic failure:
/// callers branch on it (find-or-create, the country-code filter).
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("country was not found")]
    CountryNotFound,

    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

/// One server row as parsed from the feed, before any persistence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerRecord {
    pub host_name: String,
    pub ip: String,
    pub score: i32,
    pub ping: i32,
    pub speed: i64,
    pub country_name: String,
    pub country_code: String,
    pub num_vpn_sessions: i32,
    pub uptime: i64,
    pub total_users: i32,
    pub total_traffic: i64,
    pub log_type: String,
    pub operator: String,
    pub message: String,
    pub open_vpn_config: String,
}

/// Country read projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryInfo {
    pub id: i32,
    pub name: String,
    pub code: String,
}

impl From<country::Model> for CountryInfo {
    fn from(model: country::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
        }
    }
}

/// Server read projection joined with its country.
#[derive(Debug, Clone, Serialize)]
pub struct JoinedServer {
    pub id: i32,
    pub host_name: String,
    pub ip: String,
    pub score: i32,
    pub ping: i32,
    pub speed: i64,
    pub country: CountryInfo,
    pub num_vpn_sessions: i32,
    pub uptime: i64,
    pub total_users: i32,
    pub total_traffic: i64,
    pub log_type: String,
    pub operator: String,
    pub message: String,
    pub open_vpn_config: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JoinedServer {
    pub fn from_models(server: vpn_server::Model, country: country::Model) -> Self {
        Self {
            id: server.id,
            host_name: server.host_name,
            ip: server.ip,
            score: server.score,
            ping: server.ping,
            speed: server.speed,
            country: CountryInfo::from(country),
            num_vpn_sessions: server.num_vpn_sessions,
            uptime: server.uptime,
            total_users: server.total_users,
            total_traffic: server.total_traffic,
            log_type: server.log_type,
            operator: server.operator,
            message: server.message,
            open_vpn_config: server.open_vpn_config,
            created_at: server.created_at,
            updated_at: server.updated_at,
        }
    }
}
