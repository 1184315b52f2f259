//! Configuration management for the relaydir server.
//!
//! Settings come from `conf/application.yml`, overridable through
//! `RELAYDIR_`-prefixed environment variables and a handful of command-line
//! flags.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
    #[arg(long = "feed-url")]
    feed_url: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let config_file = args
            .config_file
            .unwrap_or_else(|| "conf/application.yml".to_string());

        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("relaydir")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name(&config_file));

        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override("db.url", v)
                .expect("Failed to set database URL override");
        }
        if let Some(v) = args.feed_url {
            config_builder = config_builder
                .set_override("feed.url", v)
                .expect("Failed to set feed URL override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn http_port(&self) -> u16 {
        self.config.get_int("server.httpPort").unwrap_or(8080) as u16
    }

    pub fn grpc_port(&self) -> u16 {
        self.config.get_int("server.grpcPort").unwrap_or(50051) as u16
    }

    // ========================================================================
    // Feed Configuration
    // ========================================================================

    pub fn feed_url(&self) -> String {
        self.config
            .get_string("feed.url")
            .unwrap_or("http://www.vpngate.net/api/iphone/".to_string())
    }

    pub fn feed_interval(&self) -> Duration {
        let secs = self.config.get_int("feed.intervalSeconds").unwrap_or(60) as u64;
        Duration::from_secs(secs)
    }

    pub fn feed_timeout(&self) -> Duration {
        let secs = self.config.get_int("feed.timeoutSeconds").unwrap_or(5) as u64;
        Duration::from_secs(secs)
    }

    // ========================================================================
    // Auth Configuration
    // ========================================================================

    /// Path to the RS256 public key used to verify client credentials.
    pub fn auth_public_key_path(&self) -> String {
        self.config
            .get_string("auth.publicKeyPath")
            .unwrap_or("conf/public_key.pem".to_string())
    }

    // ========================================================================
    // Receipt Verification Configuration
    // ========================================================================

    pub fn receipt_production_url(&self) -> String {
        self.config
            .get_string("receipt.productionUrl")
            .unwrap_or("https://buy.itunes.apple.com/verifyReceipt".to_string())
    }

    pub fn receipt_sandbox_url(&self) -> String {
        self.config
            .get_string("receipt.sandboxUrl")
            .unwrap_or("https://sandbox.itunes.apple.com/verifyReceipt".to_string())
    }

    pub fn receipt_shared_secret(&self) -> Option<String> {
        self.config.get_string("receipt.sharedSecret").ok()
    }

    pub fn receipt_timeout(&self) -> Duration {
        let secs = self.config.get_int("receipt.timeoutSeconds").unwrap_or(10) as u64;
        Duration::from_secs(secs)
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn log_dir(&self) -> Option<String> {
        self.config.get_string("logging.dir").ok()
    }

    pub fn log_console_output(&self) -> bool {
        self.config.get_bool("logging.console").unwrap_or(true)
    }

    pub fn log_file_enabled(&self) -> bool {
        self.config.get_bool("logging.file").unwrap_or(true)
    }

    pub fn log_level(&self) -> String {
        self.config
            .get_string("logging.level")
            .unwrap_or("info".to_string())
    }

    // ========================================================================
    // Database Configuration
    // ========================================================================

    pub fn database_url(&self) -> String {
        self.config
            .get_string("db.url")
            .unwrap_or("sqlite://relaydir.db?mode=rwc".to_string())
    }

    /// The embedded backend is selected by a `sqlite:` database url; any
    /// other scheme goes through the external multi-connection backend.
    pub fn uses_embedded_storage(&self) -> bool {
        self.database_url().starts_with("sqlite:")
    }

    pub async fn database_connection(
        &self,
    ) -> std::result::Result<DatabaseConnection, Box<dyn std::error::Error>> {
        let max_connections = self
            .config
            .get_int("db.pool.maxConnections")
            .unwrap_or(20) as u32;
        let min_connections = self.config.get_int("db.pool.minConnections").unwrap_or(1) as u32;
        let connect_timeout = self
            .config
            .get_int("db.pool.connectTimeoutSeconds")
            .unwrap_or(30) as u64;
        let idle_timeout = self
            .config
            .get_int("db.pool.idleTimeoutSeconds")
            .unwrap_or(600) as u64;
        let sqlx_logging = self.config.get_bool("db.pool.sqlxLogging").unwrap_or(false);

        let url = self.database_url();

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .sqlx_logging(sqlx_logging)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            idle_timeout = idle_timeout,
            sqlx_logging = sqlx_logging,
            "Database connection pool configured"
        );

        let database_connection: DatabaseConnection = Database::connect(opt).await?;

        Ok(database_connection)
    }
}
