//! End-to-end ingestion tests against an in-memory SQLite store.

use std::sync::Arc;
use std::time::Duration;

use relaydir_migration::{Migrator, MigratorTrait};
use relaydir_persistence::{DirectoryRepository, EmbeddedDirectoryRepository, sea_orm::Database};
use relaydir_server::service::directory::DirectoryService;
use relaydir_server::service::ingest::{IngestionJob, RecordOutcome};

async fn new_repo() -> Arc<dyn DirectoryRepository> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    Arc::new(EmbeddedDirectoryRepository::new(db))
}

fn job(repo: Arc<dyn DirectoryRepository>) -> IngestionJob {
    IngestionJob::new(
        repo,
        "http://127.0.0.1:1/unused".to_string(),
        Duration::from_secs(5),
    )
    .expect("build ingestion job")
}

const FEED: &str = "\
*vpn_servers
#HostName,IP,Score,Ping,Speed,CountryLong,CountryShort,NumVpnSessions,Uptime,TotalUsers,TotalTraffic,LogType,Operator,Message,OpenVPN_ConfigData_Base64
server1,1.2.3.4,100,10,5000,Japan,JP,5,86400,10,1000,0,op1,,cfg
server2,5.6.7.8,90,20,9000,Japan,JP,3,3600,7,500,0,op2,,cfg2
server3,9.9.9.9,80,30,4000,Germany,DE,1,60,2,100,0,op3,,cfg3
*
";

#[tokio::test]
async fn feed_body_populates_the_directory() {
    let repo = new_repo().await;
    let ingested = job(repo.clone()).ingest_body(FEED.as_bytes()).await.unwrap();

    assert_eq!(ingested.len(), 3);
    assert!(ingested.iter().all(|r| r.outcome == RecordOutcome::Inserted));

    // Two countries, deduplicated, name ascending.
    let countries = repo.find_countries_with_servers().await.unwrap();
    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Germany", "Japan"]);

    // All servers present, speed descending.
    let servers = repo.find_all_servers().await.unwrap();
    let hosts: Vec<&str> = servers.iter().map(|s| s.host_name.as_str()).collect();
    assert_eq!(hosts, vec!["server2", "server1", "server3"]);
}

#[tokio::test]
async fn sample_row_round_trips_through_the_store() {
    let repo = new_repo().await;
    let body = "server1,1.2.3.4,100,10,5000,Japan,JP,5,86400,10,1000,0,op1,,cfg\n";
    job(repo.clone()).ingest_body(body.as_bytes()).await.unwrap();

    let servers = repo.find_servers_by_country_code("JP").await.unwrap();
    assert_eq!(servers.len(), 1);
    let s = &servers[0];
    assert_eq!(s.host_name, "server1");
    assert_eq!(s.ip, "1.2.3.4");
    assert_eq!(s.score, 100);
    assert_eq!(s.ping, 10);
    assert_eq!(s.speed, 5000);
    assert_eq!(s.country.name, "Japan");
    assert_eq!(s.country.code, "JP");
    assert_eq!(s.num_vpn_sessions, 5);
    assert_eq!(s.uptime, 86400);
    assert_eq!(s.total_users, 10);
    assert_eq!(s.total_traffic, 1000);
    assert_eq!(s.log_type, "0");
    assert_eq!(s.operator, "op1");
    assert_eq!(s.message, "");
    assert_eq!(s.open_vpn_config, "cfg");
}

#[tokio::test]
async fn a_new_cycle_replaces_rather_than_merges() {
    let repo = new_repo().await;
    let job = job(repo.clone());

    job.ingest_body(FEED.as_bytes()).await.unwrap();
    assert_eq!(repo.find_all_servers().await.unwrap().len(), 3);

    // Second cycle carries a disjoint, smaller feed.
    let second = "server9,8.8.8.8,50,5,100,France,FR,1,10,1,10,0,op9,,cfg9\n";
    job.ingest_body(second.as_bytes()).await.unwrap();

    let servers = repo.find_all_servers().await.unwrap();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].host_name, "server9");

    // Countries from the first cycle survive but no longer list.
    let countries = repo.find_countries_with_servers().await.unwrap();
    let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["FR"]);
    assert!(repo.find_country_by_code("JP").await.is_ok());
}

#[tokio::test]
async fn reingesting_the_same_country_reuses_its_row() {
    let repo = new_repo().await;
    let job = job(repo.clone());

    job.ingest_body(FEED.as_bytes()).await.unwrap();
    let jp_before = repo.find_country_by_code("JP").await.unwrap();

    job.ingest_body(FEED.as_bytes()).await.unwrap();
    let jp_after = repo.find_country_by_code("JP").await.unwrap();

    assert_eq!(jp_before.id, jp_after.id);
}

#[tokio::test]
async fn empty_feed_empties_the_directory() {
    let repo = new_repo().await;
    let job = job(repo.clone());

    job.ingest_body(FEED.as_bytes()).await.unwrap();
    let ingested = job.ingest_body(b"").await.unwrap();

    assert!(ingested.is_empty());
    assert!(repo.find_all_servers().await.unwrap().is_empty());
}

#[tokio::test]
async fn query_service_scopes_by_country() {
    let repo = new_repo().await;
    job(repo.clone()).ingest_body(FEED.as_bytes()).await.unwrap();

    let directory = DirectoryService::new(repo);

    let jp = directory.list_servers(Some("JP")).await.unwrap();
    assert_eq!(jp.len(), 2);
    assert!(jp.iter().all(|s| s.country.code == "JP"));

    let all = directory.list_servers(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let err = directory.list_servers(Some("ZZ")).await.unwrap_err();
    assert!(matches!(
        err,
        relaydir_server::error::AppError::CountryNotFound
    ));
}
