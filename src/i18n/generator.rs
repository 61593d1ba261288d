//! Bundle generation pipeline
//!
//! Snapshots the source directory, classifies it, reads the keys once and then
//! renders one bundle per terms file, strictly one locale after another.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use crate::config::{GeneratorConfig, MismatchPolicy};
use crate::utils::errors::{PropgenError, Result};
use crate::utils::logging;
use super::bundle::Bundle;
use super::classifier::{self, Classification, KeysSelection, TermsFile};
use super::reader;
use super::writer::BundleWriter;

/// Generates `.properties` bundles from a directory of terms files
#[derive(Debug, Clone)]
pub struct PropertiesGenerator {
    source_dir: PathBuf,
    mismatch_policy: MismatchPolicy,
    writer: BundleWriter,
}

/// A bundle written during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenBundle {
    pub locale: String,
    pub path: PathBuf,
    pub entries: usize,
}

/// A locale whose bundle was not produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFailure {
    pub locale: String,
    pub reason: String,
}

/// Summary of one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub keys_file: PathBuf,
    pub keys_selection: KeysSelection,
    pub key_count: usize,
    pub written: Vec<WrittenBundle>,
    pub failed: Vec<LocaleFailure>,
}

impl GenerationReport {
    /// Turn recorded locale failures into an error
    pub fn into_result(self) -> Result<Self> {
        if self.failed.is_empty() {
            Ok(self)
        } else {
            Err(PropgenError::LocalesFailed {
                failed: self.failed.into_iter().map(|f| f.locale).collect(),
            })
        }
    }
}

impl PropertiesGenerator {
    /// Create a new generator
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            source_dir: config.source_dir.clone(),
            mismatch_policy: config.mismatch_policy,
            writer: BundleWriter::new(config.output_dir.clone(), config.atomic_writes),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        self.writer.output_dir()
    }

    /// Run the whole pipeline once
    pub async fn run(&self) -> Result<GenerationReport> {
        let file_names = self.snapshot_source_dir().await?;
        let classification = classifier::classify(file_names, &self.source_dir)?;
        logging::log_classification(
            &classification.keys_file,
            &classification.keys_selection.to_string(),
            &classification.locales(),
        );

        let keys_path = self.source_dir.join(&classification.keys_file);
        let keys = reader::read_keys(&keys_path).await?;
        info!(keys_file = %keys_path.display(), key_count = keys.len(), "Keys loaded");

        let mut report = GenerationReport {
            keys_file: keys_path,
            keys_selection: classification.keys_selection,
            key_count: keys.len(),
            written: Vec::new(),
            failed: Vec::new(),
        };

        self.render_locales(&classification, &keys, &mut report).await?;

        Ok(report)
    }

    async fn render_locales(
        &self,
        classification: &Classification,
        keys: &[String],
        report: &mut GenerationReport,
    ) -> Result<()> {
        for terms_file in &classification.terms_files {
            match self.render_locale(terms_file, keys).await {
                Ok(written) => report.written.push(written),
                Err(e) if self.mismatch_policy == MismatchPolicy::Continue && e.is_recoverable() => {
                    logging::log_locale_failed(&terms_file.locale, &e);
                    report.failed.push(LocaleFailure {
                        locale: terms_file.locale.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    logging::log_locale_failed(&terms_file.locale, &e);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    async fn render_locale(&self, terms_file: &TermsFile, keys: &[String]) -> Result<WrittenBundle> {
        let terms_path = self.source_dir.join(&terms_file.file_name);
        let terms = reader::read_terms(&terms_path).await?;

        let bundle = Bundle::assemble(&terms_file.locale, keys, terms)?;
        let path = self.writer.write(&bundle).await?;
        logging::log_bundle_written(bundle.locale(), &path, bundle.len());

        Ok(WrittenBundle {
            locale: bundle.locale().to_string(),
            path,
            entries: bundle.len(),
        })
    }

    /// List the names of the files in the source directory, once, following symlinks
    async fn snapshot_source_dir(&self) -> Result<Vec<String>> {
        let io_err = |e: std::io::Error| PropgenError::io(&self.source_dir, e);
        let mut entries = fs::read_dir(&self.source_dir).await.map_err(io_err)?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            // Symlinks count by their target; an unresolvable entry is kept so a
            // matching name fails on read with its path.
            match fs::metadata(entry.path()).await {
                Ok(metadata) if !metadata.is_file() => continue,
                Ok(_) => {}
                Err(e) => debug!(path = %entry.path().display(), error = %e, "Cannot resolve directory entry"),
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => debug!(file_name = ?name, "Skipping file name that is not valid UTF-8"),
            }
        }

        debug!(dir = %self.source_dir.display(), files = names.len(), "Source directory listed");
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn generator_for(dir: &Path, policy: MismatchPolicy) -> PropertiesGenerator {
        PropertiesGenerator::new(&GeneratorConfig {
            source_dir: dir.to_path_buf(),
            output_dir: dir.join("output"),
            mismatch_policy: policy,
            atomic_writes: true,
        })
    }

    #[tokio::test]
    async fn test_run_with_keys_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keys.txt"), "Olá\nAdeus\n").await.unwrap();
        fs::write(dir.path().join("terms_en.txt"), "Hello\nBye\n").await.unwrap();
        fs::write(dir.path().join("terms_pt.txt"), "Olá\nAdeus\n").await.unwrap();

        let report = generator_for(dir.path(), MismatchPolicy::Abort).run().await.unwrap();

        assert_eq!(report.keys_selection, KeysSelection::KeysFile);
        assert_eq!(report.key_count, 2);
        assert_eq!(report.written.len(), 2);
        let pt = fs::read_to_string(dir.path().join("output/i18n_pt.properties")).await.unwrap();
        assert_eq!(pt, "Ola = Ol\\u00E1\nAdeus = Adeus\n");
    }

    #[tokio::test]
    async fn test_directories_are_not_classified() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("terms_xx")).await.unwrap();
        fs::write(dir.path().join("terms_en"), "Hi\n").await.unwrap();

        let report = generator_for(dir.path(), MismatchPolicy::Abort).run().await.unwrap();

        assert_eq!(report.keys_selection, KeysSelection::SoleTermsFile);
        assert_eq!(report.written.len(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinked_terms_file_is_classified() {
        let dir = tempfile::tempdir().unwrap();
        let shared = dir.path().join("shared");
        let source = dir.path().join("resources");
        fs::create_dir(&shared).await.unwrap();
        fs::create_dir(&source).await.unwrap();
        fs::write(shared.join("terms_en.txt"), "Hello\nBye\n").await.unwrap();
        fs::symlink(shared.join("terms_en.txt"), source.join("terms_en.txt")).await.unwrap();
        fs::write(source.join("terms_fr.txt"), "Bonjour\nAu revoir\n").await.unwrap();

        let report = generator_for(&source, MismatchPolicy::Abort).run().await.unwrap();

        assert_eq!(report.keys_selection, KeysSelection::EnglishTermsFile);
        assert_eq!(report.keys_file, source.join("terms_en.txt"));
        let locales: Vec<&str> = report.written.iter().map(|w| w.locale.as_str()).collect();
        assert_eq!(locales, vec!["en", "fr"]);
        let fr = fs::read_to_string(source.join("output/i18n_fr.properties")).await.unwrap();
        assert_eq!(fr, "Hello = Bonjour\nBye = Au revoir\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_dangling_terms_symlink_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keys.txt"), "a\n").await.unwrap();
        fs::symlink(dir.path().join("gone.txt"), dir.path().join("terms_de.txt")).await.unwrap();

        assert_matches!(
            generator_for(dir.path(), MismatchPolicy::Abort).run().await,
            Err(PropgenError::Io { path, .. }) if path == dir.path().join("terms_de.txt")
        );
    }

    #[tokio::test]
    async fn test_continue_policy_records_failures() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keys"), "a\nb\n").await.unwrap();
        fs::write(dir.path().join("terms_de"), "A\n").await.unwrap();
        fs::write(dir.path().join("terms_fr"), "A\nB\n").await.unwrap();

        let report = generator_for(dir.path(), MismatchPolicy::Continue).run().await.unwrap();

        assert_eq!(report.written.len(), 1);
        assert_eq!(report.written[0].locale, "fr");
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].locale, "de");
        assert_matches!(
            report.into_result(),
            Err(PropgenError::LocalesFailed { failed }) if failed == vec!["de".to_string()]
        );
    }

    #[tokio::test]
    async fn test_missing_source_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        assert_matches!(
            generator_for(&missing, MismatchPolicy::Abort).run().await,
            Err(PropgenError::Io { path, .. }) if path == missing
        );
    }
}
