//! Configuration management module
//!
//! This module handles loading and validation of generator configuration
//! from TOML files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{Settings, GeneratorConfig, LoggingConfig, MismatchPolicy};
