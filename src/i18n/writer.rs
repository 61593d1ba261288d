//! Bundle output
//!
//! Writes rendered bundles into the shared output directory, replacing any
//! bundle of the same locale.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use crate::utils::errors::{PropgenError, Result};
use super::bundle::Bundle;

/// Writes bundles into one output directory
#[derive(Debug, Clone)]
pub struct BundleWriter {
    output_dir: PathBuf,
    atomic: bool,
}

impl BundleWriter {
    pub fn new(output_dir: impl Into<PathBuf>, atomic: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            atomic,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write a bundle and return the path of the written file
    ///
    /// The output directory is created when missing. With atomic writes the
    /// content lands in a hidden temporary sibling first and is renamed over
    /// the target, so a failed run never leaves a half-written bundle.
    pub async fn write(&self, bundle: &Bundle) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| PropgenError::io(&self.output_dir, e))?;

        let target = self.output_dir.join(bundle.file_name());
        let content = bundle.render();

        if !self.atomic {
            fs::write(&target, content)
                .await
                .map_err(|e| PropgenError::io(&target, e))?;
            return Ok(target);
        }

        let temp = self.output_dir.join(format!(".{}.tmp", bundle.file_name()));
        if let Err(e) = fs::write(&temp, content).await {
            let _ = fs::remove_file(&temp).await;
            return Err(PropgenError::io(&temp, e));
        }
        if let Err(e) = fs::rename(&temp, &target).await {
            let _ = fs::remove_file(&temp).await;
            return Err(PropgenError::io(&target, e));
        }

        debug!(path = %target.display(), "Bundle renamed into place");
        Ok(target)
    }
}
