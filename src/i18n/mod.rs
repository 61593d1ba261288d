//! Properties bundle generation
//!
//! This module turns per-locale terms files into Java-style `.properties`
//! bundles: file classification, line normalization, bundle assembly and
//! output, composed by the generator pipeline.

pub mod bundle;
pub mod classifier;
pub mod generator;
pub mod normalizer;
pub mod reader;
pub mod writer;

// Re-export commonly used i18n components
pub use bundle::Bundle;
pub use classifier::{classify, Classification, FileKind, KeysSelection, TermsFile};
pub use generator::{GenerationReport, LocaleFailure, PropertiesGenerator, WrittenBundle};
pub use normalizer::{encode_term, normalize_key, LineMode};
pub use writer::BundleWriter;
