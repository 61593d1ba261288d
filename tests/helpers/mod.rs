//! Test helpers module
//!
//! Fixture directories for driving the generator end to end.

use std::path::{Path, PathBuf};
use std::sync::Once;

use i18n_propgen::config::{GeneratorConfig, MismatchPolicy};
use i18n_propgen::PropertiesGenerator;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// A temporary `resources/` tree with an `output/` directory beneath it
pub struct FixtureDir {
    pub temp_dir: tempfile::TempDir,
}

impl FixtureDir {
    /// Create an empty source directory
    pub fn new() -> Self {
        init_test_env();
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir(temp_dir.path().join("resources")).expect("Failed to create resources dir");
        Self { temp_dir }
    }

    /// Source directory path
    pub fn source_dir(&self) -> PathBuf {
        self.temp_dir.path().join("resources")
    }

    /// Output directory path
    pub fn output_dir(&self) -> PathBuf {
        self.source_dir().join("output")
    }

    /// Write a source file with the given lines, each terminated by `\n`
    pub fn with_file(self, name: &str, lines: &[&str]) -> Self {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        std::fs::write(self.source_dir().join(name), content).expect("Failed to write fixture file");
        self
    }

    /// Generator over this fixture
    pub fn generator(&self, policy: MismatchPolicy) -> PropertiesGenerator {
        PropertiesGenerator::new(&GeneratorConfig {
            source_dir: self.source_dir(),
            output_dir: self.output_dir(),
            mismatch_policy: policy,
            atomic_writes: true,
        })
    }

    /// Read a generated bundle
    pub fn bundle(&self, locale: &str) -> String {
        read(&self.output_dir().join(format!("i18n_{}.properties", locale)))
    }

    /// Whether a bundle was generated for `locale`
    pub fn has_bundle(&self, locale: &str) -> bool {
        self.output_dir().join(format!("i18n_{}.properties", locale)).exists()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
