//! The directory repository capability trait.
//!
//! Both storage backends ([`crate::sql::ExternalDbDirectoryRepository`] and
//! [`crate::embedded::EmbeddedDirectoryRepository`]) satisfy the same
//! observable behavior; callers hold an `Arc<dyn DirectoryRepository>` and
//! never branch on backend identity.

use async_trait::async_trait;

use crate::model::{CountryInfo, JoinedServer, RepoError, ServerRecord};

#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Exact match on the natural key. A miss is
    /// [`RepoError::CountryNotFound`], which callers branch on.
    async fn find_country_by_code(&self, code: &str) -> Result<CountryInfo, RepoError>;

    /// Find-or-create, idempotent by code: returns the existing id without
    /// writing when the code is already present, inserts only on
    /// `CountryNotFound`, and propagates any other lookup failure. The write
    /// path needs the resolved id back synchronously to populate the
    /// dependent server row, which is why de-duplication happens here and
    /// not behind a uniqueness constraint alone.
    async fn create_country(&self, name: &str, code: &str) -> Result<i32, RepoError>;

    /// Countries that have at least one referencing server row,
    /// deduplicated, ordered by name ascending.
    async fn find_countries_with_servers(&self) -> Result<Vec<CountryInfo>, RepoError>;

    /// Unconditional insert; the caller has already resolved `country_id`.
    async fn create_server(
        &self,
        record: &ServerRecord,
        country_id: i32,
    ) -> Result<i32, RepoError>;

    /// Resolves the country by code first (propagating `CountryNotFound`),
    /// then returns that country's servers joined with it, ordered by speed
    /// descending. A country with zero servers yields an empty vec.
    async fn find_servers_by_country_code(
        &self,
        code: &str,
    ) -> Result<Vec<JoinedServer>, RepoError>;

    /// All servers joined with their country, ordered by speed descending.
    async fn find_all_servers(&self) -> Result<Vec<JoinedServer>, RepoError>;

    /// Irreversibly empties the server table; used only as the first step of
    /// a full-refresh cycle. No transaction spans the cycle, so readers
    /// racing a refresh can observe an empty or partially repopulated
    /// directory.
    async fn truncate_servers(&self) -> Result<(), RepoError>;
}
