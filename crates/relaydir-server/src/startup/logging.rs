//! Multi-file logging setup.
//!
//! The root `relaydir.log` file captures all events; component files route
//! by tracing target so feed ingestion and auth activity can be followed in
//! isolation:
//!
//! | Log File     | Target Prefixes                                      |
//! |--------------|------------------------------------------------------|
//! | relaydir.log | (all)                                                |
//! | ingest.log   | relaydir_server::service::ingest, relaydir_server::feed |
//! | auth.log     | relaydir_server::auth, relaydir_server::middleware   |

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

struct ComponentLogDef {
    file_name: &'static str,
    targets: &'static [&'static str],
}

const COMPONENT_LOGS: &[ComponentLogDef] = &[
    ComponentLogDef {
        file_name: "ingest.log",
        targets: &["relaydir_server::service::ingest", "relaydir_server::feed"],
    },
    ComponentLogDef {
        file_name: "auth.log",
        targets: &["relaydir_server::auth", "relaydir_server::middleware"],
    },
];

/// Logging configuration for the entire application.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    pub console_output: bool,
    pub file_logging: bool,
    pub level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        Self {
            log_dir: PathBuf::from(format!("{}/relaydir/logs", home)),
            console_output: true,
            file_logging: true,
            level: Level::INFO,
        }
    }
}

impl LoggingConfig {
    /// Create from application configuration.
    pub fn from_config(
        log_dir: Option<String>,
        console_output: bool,
        file_logging: bool,
        level: String,
    ) -> Self {
        let log_dir = log_dir.map(PathBuf::from).unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(format!("{}/relaydir/logs", home))
        });

        Self {
            log_dir,
            console_output,
            file_logging,
            level: level.parse().unwrap_or(Level::INFO),
        }
    }
}

/// Guard that keeps the logging system alive.
///
/// Holds the file appender worker guards; when dropped, buffered log output
/// is flushed.
pub struct LoggingGuard {
    _file_guards: Vec<WorkerGuard>,
}

/// Initialize the logging system with console output, a root log file and
/// per-component log files.
///
/// The `RUST_LOG` env var overrides the configured level for the console and
/// root file layers; component files always capture everything from their
/// targets.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, Box<dyn std::error::Error>> {
    if config.file_logging {
        std::fs::create_dir_all(&config.log_dir)?;
    }

    let mut guards: Vec<WorkerGuard> = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.console_output {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_names(true)
            .with_filter(filter);
        layers.push(Box::new(console_layer));
    }

    if config.file_logging {
        let root_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "relaydir.log");
        let (root_nb, root_guard) = tracing_appender::non_blocking(root_appender);
        guards.push(root_guard);

        let root_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
        let root_layer = fmt::layer()
            .with_writer(root_nb)
            .with_target(true)
            .with_thread_names(true)
            .with_ansi(false)
            .with_filter(root_filter);
        layers.push(Box::new(root_layer));

        for component in COMPONENT_LOGS {
            let appender =
                RollingFileAppender::new(Rotation::DAILY, &config.log_dir, component.file_name);
            let (nb, guard) = tracing_appender::non_blocking(appender);
            guards.push(guard);

            let mut targets = Targets::new();
            for target in component.targets {
                targets = targets.with_target(*target, LevelFilter::TRACE);
            }

            let layer = fmt::layer()
                .with_writer(nb)
                .with_target(true)
                .with_ansi(false)
                .with_filter(targets);
            layers.push(Box::new(layer));
        }
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))?;

    if config.file_logging {
        tracing::info!(
            log_dir = %config.log_dir.display(),
            "File logging initialized: relaydir.log (root) + {} component log files",
            COMPONENT_LOGS.len()
        );
    }

    Ok(LoggingGuard {
        _file_guards: guards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(config.console_output);
        assert!(config.file_logging);
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_logging_config_from_config() {
        let config = LoggingConfig::from_config(
            Some("/tmp/test-logs".to_string()),
            false,
            true,
            "debug".to_string(),
        );
        assert_eq!(config.log_dir, PathBuf::from("/tmp/test-logs"));
        assert!(!config.console_output);
        assert_eq!(config.level, Level::DEBUG);
    }

    #[test]
    fn test_component_log_definitions() {
        for component in COMPONENT_LOGS {
            assert!(component.file_name.ends_with(".log"));
            assert!(!component.targets.is_empty());
        }
    }
}
