//! Telemetry initialization - tracing subscriber setup.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "server.log";

/// The active file plus one rotated backup.
const MAX_LOG_FILES: usize = 2;

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Service name attached to the startup event.
    pub service_name: String,
    /// Daily-rotated log file; `None` logs to stdout only.
    pub log_file: Option<PathBuf>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            service_name: "postboard-api".to_string(),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(defaults.json_logs),
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            log_file: match std::env::var("LOG_FILE") {
                Ok(value) => log_file_from(&value),
                Err(_) => defaults.log_file,
            },
        }
    }
}

/// An empty `LOG_FILE` turns the file sink off.
fn log_file_from(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    (!value.is_empty()).then(|| PathBuf::from(value))
}

/// Split a log path into the directory to rotate in and the file name prefix.
fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    (dir.to_path_buf(), prefix)
}

fn log_file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let (dir, prefix) = split_log_path(path);
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
}

/// Initialize the global tracing subscriber.
///
/// The returned guard flushes the file sink on drop, so hold it for the
/// lifetime of the process.
pub fn init_telemetry(config: &TelemetryConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,postboard_api=debug,postboard_infra=debug"));

    let mut file_error = None;
    let (file_layer, guard) = match config.log_file.as_deref().map(log_file_appender) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            file_error = Some(e);
            (None, None)
        }
        None => (None, None),
    };

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(fmt::layer().pretty())
            .init();
    }

    if let Some(e) = file_error {
        tracing::warn!(error = %e, "File logging disabled");
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        log_file = ?config.log_file,
        "Telemetry initialized"
    );

    guard
}
