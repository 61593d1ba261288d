//! Utility modules
//!
//! This module contains common utilities used throughout the generator,
//! including error handling and logging setup.

pub mod errors;
pub mod logging;

pub use errors::{PropgenError, Result};
