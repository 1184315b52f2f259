//! Repository behavior tests against an in-memory SQLite store.

use relaydir_migration::{Migrator, MigratorTrait};
use relaydir_persistence::sea_orm::Database;
use relaydir_persistence::{
    DirectoryRepository, EmbeddedDirectoryRepository, RepoError, ServerRecord,
};

async fn new_repo() -> EmbeddedDirectoryRepository {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    EmbeddedDirectoryRepository::new(db)
}

fn record(host: &str, country_name: &str, country_code: &str, speed: i64) -> ServerRecord {
    ServerRecord {
        host_name: host.to_string(),
        ip: "1.2.3.4".to_string(),
        score: 100,
        ping: 10,
        speed,
        country_name: country_name.to_string(),
        country_code: country_code.to_string(),
        num_vpn_sessions: 5,
        uptime: 86400,
        total_users: 10,
        total_traffic: 1000,
        log_type: "0".to_string(),
        operator: "op".to_string(),
        message: String::new(),
        open_vpn_config: "cfg".to_string(),
    }
}

#[tokio::test]
async fn create_country_is_idempotent_by_code() {
    let repo = new_repo().await;

    let first = repo.create_country("Japan", "JP").await.unwrap();
    let second = repo.create_country("Japan", "JP").await.unwrap();
    assert_eq!(first, second);

    let found = repo.find_country_by_code("JP").await.unwrap();
    assert_eq!(found.id, first);
    assert_eq!(found.name, "Japan");
    assert_eq!(found.code, "JP");
}

#[tokio::test]
async fn missing_country_is_a_distinguished_error() {
    let repo = new_repo().await;

    let err = repo.find_country_by_code("ZZ").await.unwrap_err();
    assert!(matches!(err, RepoError::CountryNotFound));

    let err = repo.find_servers_by_country_code("ZZ").await.unwrap_err();
    assert!(matches!(err, RepoError::CountryNotFound));
}

#[tokio::test]
async fn known_country_without_servers_yields_empty_list() {
    let repo = new_repo().await;

    repo.create_country("Japan", "JP").await.unwrap();
    let servers = repo.find_servers_by_country_code("JP").await.unwrap();
    assert!(servers.is_empty());
}

#[tokio::test]
async fn servers_are_ordered_by_speed_descending() {
    let repo = new_repo().await;

    let jp = repo.create_country("Japan", "JP").await.unwrap();
    repo.create_server(&record("slow", "Japan", "JP", 100), jp)
        .await
        .unwrap();
    repo.create_server(&record("fast", "Japan", "JP", 9000), jp)
        .await
        .unwrap();
    repo.create_server(&record("mid", "Japan", "JP", 5000), jp)
        .await
        .unwrap();

    let servers = repo.find_servers_by_country_code("JP").await.unwrap();
    let hosts: Vec<&str> = servers.iter().map(|s| s.host_name.as_str()).collect();
    assert_eq!(hosts, vec!["fast", "mid", "slow"]);

    let all = repo.find_all_servers().await.unwrap();
    let speeds: Vec<i64> = all.iter().map(|s| s.speed).collect();
    assert_eq!(speeds, vec![9000, 5000, 100]);
}

#[tokio::test]
async fn joined_projection_carries_the_country() {
    let repo = new_repo().await;

    let jp = repo.create_country("Japan", "JP").await.unwrap();
    repo.create_server(&record("server1", "Japan", "JP", 5000), jp)
        .await
        .unwrap();

    let servers = repo.find_all_servers().await.unwrap();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].country.code, "JP");
    assert_eq!(servers[0].country.name, "Japan");
}

#[tokio::test]
async fn country_listing_is_deduplicated_and_name_ordered() {
    let repo = new_repo().await;

    let jp = repo.create_country("Japan", "JP").await.unwrap();
    let de = repo.create_country("Germany", "DE").await.unwrap();
    // A country with no servers must not appear.
    repo.create_country("Sweden", "SE").await.unwrap();

    repo.create_server(&record("a", "Japan", "JP", 1), jp)
        .await
        .unwrap();
    repo.create_server(&record("b", "Japan", "JP", 2), jp)
        .await
        .unwrap();
    repo.create_server(&record("c", "Germany", "DE", 3), de)
        .await
        .unwrap();

    let countries = repo.find_countries_with_servers().await.unwrap();
    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Germany", "Japan"]);
}

#[tokio::test]
async fn truncate_empties_servers_but_keeps_countries() {
    let repo = new_repo().await;

    let jp = repo.create_country("Japan", "JP").await.unwrap();
    repo.create_server(&record("a", "Japan", "JP", 1), jp)
        .await
        .unwrap();
    repo.create_server(&record("b", "Japan", "JP", 2), jp)
        .await
        .unwrap();

    repo.truncate_servers().await.unwrap();

    assert!(repo.find_all_servers().await.unwrap().is_empty());
    // The country survives a refresh; only server rows are replaced.
    assert!(repo.find_country_by_code("JP").await.is_ok());
    assert!(repo
        .find_countries_with_servers()
        .await
        .unwrap()
        .is_empty());
}
