//! Directory repository backend for the embedded SQLite store.
//!
//! Behavioral differences from the external backend are deliberate and
//! small: SQLite has no `TRUNCATE TABLE`, so the full-refresh reset is a
//! `DELETE FROM`, and the country listing carries no empty-code guard
//! because the embedded store is only ever populated through the feed.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entity::{country, vpn_server};
use crate::model::{CountryInfo, JoinedServer, RepoError, ServerRecord};
use crate::traits::DirectoryRepository;

#[derive(Clone)]
pub struct EmbeddedDirectoryRepository {
    db: DatabaseConnection,
}

impl EmbeddedDirectoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DirectoryRepository for EmbeddedDirectoryRepository {
    async fn find_country_by_code(&self, code: &str) -> Result<CountryInfo, RepoError> {
        country::Entity::find()
            .filter(country::Column::Code.eq(code))
            .one(&self.db)
            .await?
            .map(CountryInfo::from)
            .ok_or(RepoError::CountryNotFound)
    }

    async fn create_country(&self, name: &str, code: &str) -> Result<i32, RepoError> {
        match self.find_country_by_code(code).await {
            Ok(existing) => Ok(existing.id),
            Err(RepoError::CountryNotFound) => {
                let now = Utc::now();
                let result = country::Entity::insert(country::ActiveModel {
                    name: Set(name.to_string()),
                    code: Set(code.to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                })
                .exec(&self.db)
                .await?;
                Ok(result.last_insert_id)
            }
            Err(e) => Err(e),
        }
    }

    async fn find_countries_with_servers(&self) -> Result<Vec<CountryInfo>, RepoError> {
        let rows = country::Entity::find()
            .inner_join(vpn_server::Entity)
            .distinct()
            .order_by_asc(country::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(CountryInfo::from).collect())
    }

    async fn create_server(
        &self,
        record: &ServerRecord,
        country_id: i32,
    ) -> Result<i32, RepoError> {
        let now = Utc::now();
        let result = vpn_server::Entity::insert(vpn_server::ActiveModel {
            host_name: Set(record.host_name.clone()),
            ip: Set(record.ip.clone()),
            score: Set(record.score),
            ping: Set(record.ping),
            speed: Set(record.speed),
            country_id: Set(country_id),
            num_vpn_sessions: Set(record.num_vpn_sessions),
            uptime: Set(record.uptime),
            total_users: Set(record.total_users),
            total_traffic: Set(record.total_traffic),
            log_type: Set(record.log_type.clone()),
            operator: Set(record.operator.clone()),
            message: Set(record.message.clone()),
            open_vpn_config: Set(record.open_vpn_config.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;
        Ok(result.last_insert_id)
    }

    async fn find_servers_by_country_code(
        &self,
        code: &str,
    ) -> Result<Vec<JoinedServer>, RepoError> {
        let country = self.find_country_by_code(code).await?;
        let rows = vpn_server::Entity::find()
            .find_also_related(country::Entity)
            .filter(vpn_server::Column::CountryId.eq(country.id))
            .order_by_desc(vpn_server::Column::Speed)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|(server, country)| {
                country.map(|c| JoinedServer::from_models(server, c))
            })
            .collect())
    }

    async fn find_all_servers(&self) -> Result<Vec<JoinedServer>, RepoError> {
        let rows = vpn_server::Entity::find()
            .find_also_related(country::Entity)
            .order_by_desc(vpn_server::Column::Speed)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|(server, country)| {
                country.map(|c| JoinedServer::from_models(server, c))
            })
            .collect())
    }

    async fn truncate_servers(&self) -> Result<(), RepoError> {
        vpn_server::Entity::delete_many().exec(&self.db).await?;
        Ok(())
    }
}
