//! i18n-propgen
//!
//! Generates Java-style `.properties` resource bundles from plain-text terms
//! files, one file per locale, pairing every term with an ASCII-safe key taken
//! from a keys file or, failing that, from one of the terms files.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PropgenError, Result};

// Re-export main components for easy access
pub use i18n::{GenerationReport, PropertiesGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
