//! File logging for the terminal client.
//!
//! The TUI owns stdout and stderr, so every tracing event goes to
//! `<cache dir>/logs/<session>/client.log` instead.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Installs the global subscriber and returns the log file path.
///
/// `RUST_LOG` controls the filter; it defaults to `info`.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session_id = session_id
        .map(str::to_owned)
        .unwrap_or_else(default_session_id);

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    // Leak the guard to keep the file writer alive for the whole process.
    std::mem::forget(guard);

    let log_file = session_log_dir.join(LOG_FILE);
    tracing::info!(session = %session_id, "Logging initialized");
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

/// Platform cache directory for logs, e.g. `~/.cache/sweetfield/logs` on
/// Linux.
pub fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "sweetfield")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("sweetfield").join("logs"))
}
