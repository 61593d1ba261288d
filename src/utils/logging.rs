//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the generator pipeline.

use std::path::Path;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, PropgenError, Result};

/// Initialize logging based on configuration
///
/// The returned guard must be kept alive for as long as the file layer should
/// receive events. A subscriber that is already installed is left in place.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| PropgenError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path.file_name().ok_or_else(|| {
                PropgenError::Config(format!("Log file path has no file name: {}", file_path))
            })?;

            let file_appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init();

    if installed.is_ok() {
        info!("Logging initialized with level: {}", config.level);
    }
    Ok(guard)
}

/// Log which file supplies keys and how many locales will be rendered
pub fn log_classification(keys_file: &str, selection: &str, locales: &[&str]) {
    info!(
        keys_file = keys_file,
        selection = selection,
        locale_count = locales.len(),
        locales = ?locales,
        "Source directory classified"
    );
}

/// Log a bundle written to disk
pub fn log_bundle_written(locale: &str, path: &Path, entries: usize) {
    info!(
        locale = locale,
        path = %path.display(),
        entries = entries,
        "Bundle written"
    );
}

/// Log a locale whose bundle could not be produced
pub fn log_locale_failed(locale: &str, error: &PropgenError) {
    match error.severity() {
        ErrorSeverity::Warning => warn!(
            locale = locale,
            error = %error,
            severity = %error.severity(),
            "Locale failed"
        ),
        _ => error!(
            locale = locale,
            error = %error,
            severity = %error.severity(),
            "Locale failed"
        ),
    }
}
