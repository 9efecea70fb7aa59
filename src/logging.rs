//! Tracing setup.
//!
//! The terminal owns stdout/stderr while a session runs, so logs only ever go
//! to the file named by `FOLIO_LOG_FILE`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Installs a file-backed subscriber when a log file is configured.
/// Returns the log path, or `None` when logging stays disabled.
pub fn init(config: &EnvConfig) -> Result<Option<PathBuf>, LoggingError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter_for(config))
        .with(file_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    tracing::info!(path = %path.display(), "folio tracing initialized");
    Ok(Some(path.to_path_buf()))
}

fn filter_for(config: &EnvConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(config)))
}

fn default_directive(config: &EnvConfig) -> &'static str {
    if config.debug {
        "folio=debug"
    } else {
        "folio=info"
    }
}
