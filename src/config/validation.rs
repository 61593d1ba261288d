//! Configuration validation module
//!
//! This module provides validation functions for generator configuration
//! so that a run never starts against unusable directories.

use crate::utils::errors::{PropgenError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_generator_config(&settings.generator)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate generator configuration
fn validate_generator_config(config: &super::GeneratorConfig) -> Result<()> {
    if config.source_dir.as_os_str().is_empty() {
        return Err(PropgenError::Config(
            "Source directory is required".to_string()
        ));
    }

    if config.output_dir.as_os_str().is_empty() {
        return Err(PropgenError::Config(
            "Output directory is required".to_string()
        ));
    }

    if config.source_dir == config.output_dir {
        return Err(PropgenError::Config(
            format!("Output directory must differ from source directory: {}", config.source_dir.display())
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PropgenError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PropgenError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if matches!(config.file_path.as_deref(), Some("")) {
        return Err(PropgenError::Config(
            "Log file path must not be empty when set".to_string()
        ));
    }

    Ok(())
}
