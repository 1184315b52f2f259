//! Read-side queries over the server directory.

use std::sync::Arc;

use relaydir_persistence::{CountryInfo, DirectoryRepository, JoinedServer};

use crate::error::AppError;

/// Query service shared by both protocol front ends. All ordering and
/// filtering semantics live in the repository; this layer only classifies
/// failures.
#[derive(Clone)]
pub struct DirectoryService {
    repository: Arc<dyn DirectoryRepository>,
}

impl DirectoryService {
    pub fn new(repository: Arc<dyn DirectoryRepository>) -> Self {
        Self { repository }
    }

    /// Countries that currently have at least one server, name ascending.
    pub async fn list_countries(&self) -> Result<Vec<CountryInfo>, AppError> {
        Ok(self.repository.find_countries_with_servers().await?)
    }

    /// Servers joined with their country, speed descending. With a country
    /// code the listing is scoped to that country; an unknown code is
    /// `CountryNotFound`, while a known code with no servers is an empty
    /// listing.
    pub async fn list_servers(
        &self,
        country_code: Option<&str>,
    ) -> Result<Vec<JoinedServer>, AppError> {
        let servers = match country_code {
            Some(code) if !code.is_empty() => {
                self.repository.find_servers_by_country_code(code).await?
            }
            _ => self.repository.find_all_servers().await?,
        };
        Ok(servers)
    }
}
