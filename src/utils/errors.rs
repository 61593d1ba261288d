//! Error handling for i18n-propgen
//!
//! This module defines the error type shared by every stage of the generator
//! and the severity classification used when failures are logged.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the properties generator
#[derive(Error, Debug)]
pub enum PropgenError {
    #[error("No terms files found in {}", .dir.display())]
    Discovery { dir: PathBuf },

    #[error("Number of terms and keys does not match for locale '{locale}': {keys} keys, {terms} terms")]
    Cardinality { locale: String, keys: usize, terms: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bundles could not be generated for locales: {}", .failed.join(", "))]
    LocalesFailed { failed: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, PropgenError>;

impl PropgenError {
    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PropgenError::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the error is confined to a single locale, so other locales may proceed
    pub fn is_recoverable(&self) -> bool {
        match self {
            PropgenError::Discovery { .. } => false,
            PropgenError::Cardinality { .. } => true,
            PropgenError::Io { .. } => false,
            PropgenError::LocalesFailed { .. } => false,
            PropgenError::Config(_) => false,
            PropgenError::ConfigLoad(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PropgenError::Discovery { .. } => ErrorSeverity::Critical,
            PropgenError::Config(_) => ErrorSeverity::Critical,
            PropgenError::ConfigLoad(_) => ErrorSeverity::Critical,
            PropgenError::Cardinality { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
