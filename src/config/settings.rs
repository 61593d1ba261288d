//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from a TOML file and environment variables.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::utils::errors::Result;

/// Base name of the optional configuration file (`propgen.toml`, `propgen.yaml`, ...)
pub const CONFIG_FILE_NAME: &str = "propgen";

/// Prefix of environment variables overriding file settings
pub const ENV_PREFIX: &str = "PROPGEN";

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub logging: LoggingConfig,
}

/// What to do when a locale cannot be rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Stop the run at the first failing locale
    #[default]
    Abort,
    /// Record the failure, render the remaining locales, report at the end
    Continue,
}

/// Bundle generation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding `keys[.txt]` and `terms_<locale>[.txt]` files
    pub source_dir: PathBuf,
    /// Directory receiving `i18n_<locale>.properties` bundles
    pub output_dir: PathBuf,
    pub mismatch_policy: MismatchPolicy,
    /// Write each bundle to a temporary file and rename it into place
    pub atomic_writes: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from the optional configuration file and environment variables
    pub fn new() -> Result<Self> {
        Self::build(
            config::Config::builder()
                .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false)),
        )
    }

    /// Load settings from an explicit configuration file, environment still applied
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(
            config::Config::builder()
                .add_source(config::File::from(path.as_ref()).required(true)),
        )
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("resources"),
            output_dir: PathBuf::from("resources/output"),
            mismatch_policy: MismatchPolicy::Abort,
            atomic_writes: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::PropgenError;
    use assert_matches::assert_matches;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_defaults_follow_resources_convention() {
        let settings = Settings::default();
        assert_eq!(settings.generator.source_dir, PathBuf::from("resources"));
        assert_eq!(settings.generator.output_dir, PathBuf::from("resources/output"));
        assert_eq!(settings.generator.mismatch_policy, MismatchPolicy::Abort);
        assert!(settings.generator.atomic_writes);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    #[serial]
    fn test_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[generator]\nsource_dir = \"lang\"\nmismatch_policy = \"continue\"\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.generator.source_dir, PathBuf::from("lang"));
        assert_eq!(settings.generator.output_dir, PathBuf::from("resources/output"));
        assert_eq!(settings.generator.mismatch_policy, MismatchPolicy::Continue);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        std::env::set_var("PROPGEN_GENERATOR__OUTPUT_DIR", "out/bundles");
        let settings = Settings::new();
        std::env::remove_var("PROPGEN_GENERATOR__OUTPUT_DIR");

        let settings = settings.unwrap();
        assert_eq!(settings.generator.output_dir, PathBuf::from("out/bundles"));
        assert_eq!(settings.generator.source_dir, PathBuf::from("resources"));
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_config_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::from_file(dir.path().join("absent.toml"));

        assert_matches!(result, Err(PropgenError::ConfigLoad(_)));
    }

    #[test]
    #[serial]
    fn test_unknown_policy_is_config_load_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[generator]\nmismatch_policy = \"retry\"").unwrap();

        assert_matches!(Settings::from_file(file.path()), Err(PropgenError::ConfigLoad(_)));
    }
}
