//! Source file classification
//!
//! Decides, from a snapshot of file names, which files carry per-locale terms
//! and which single file supplies the property keys.

use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::utils::errors::{PropgenError, Result};

/// `terms_<locale>` with an optional `.txt` suffix; group 1 is the locale
static TERMS_FILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^terms_([^.]+)(\.txt)?$").unwrap());

/// `keys` with an optional `.txt` suffix
static KEYS_FILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^keys(\.txt)?$").unwrap());

/// Substring marking a locale as English when choosing a fallback keys source
const ENGLISH_LOCALE_MARKER: &str = "en";

/// Kind of a single file in the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    KeysFile,
    TermsFile { locale: String },
    Unrecognized,
}

impl FileKind {
    /// Classify one file name
    pub fn of(file_name: &str) -> Self {
        if KEYS_FILE_REGEX.is_match(file_name) {
            return FileKind::KeysFile;
        }

        match TERMS_FILE_REGEX.captures(file_name) {
            Some(captures) => FileKind::TermsFile {
                locale: captures[1].to_string(),
            },
            None => FileKind::Unrecognized,
        }
    }
}

/// A file holding the terms of one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsFile {
    pub file_name: String,
    pub locale: String,
}

/// Which fallback rule picked the keys source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeysSelection {
    /// The only `keys[.txt]` file
    KeysFile,
    /// The only terms file present
    SoleTermsFile,
    /// First terms file whose locale contains "en"
    EnglishTermsFile,
    /// First terms file by name
    FirstTermsFile,
}

impl fmt::Display for KeysSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeysSelection::KeysFile => write!(f, "keys file"),
            KeysSelection::SoleTermsFile => write!(f, "sole terms file"),
            KeysSelection::EnglishTermsFile => write!(f, "english terms file"),
            KeysSelection::FirstTermsFile => write!(f, "first terms file"),
        }
    }
}

/// Outcome of classifying a source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// File whose lines become property keys
    pub keys_file: String,
    pub keys_selection: KeysSelection,
    /// Every terms file, ordered by file name. A terms file reused as the
    /// keys source is still listed here and rendered for its own locale.
    pub terms_files: Vec<TermsFile>,
}

impl Classification {
    /// Locales that will be rendered, in processing order
    pub fn locales(&self) -> Vec<&str> {
        self.terms_files.iter().map(|f| f.locale.as_str()).collect()
    }
}

/// Classify a directory snapshot
///
/// Names are sorted first so that every fallback rule is deterministic
/// regardless of the order the filesystem listed them in. `source_dir` is only
/// used to describe a [`PropgenError::Discovery`] failure.
pub fn classify<I, S>(file_names: I, source_dir: &std::path::Path) -> Result<Classification>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: Vec<String> = file_names.into_iter().map(Into::into).collect();
    names.sort();

    let mut keys_candidates = Vec::new();
    let mut terms_files = Vec::new();
    for name in names {
        match FileKind::of(&name) {
            FileKind::KeysFile => keys_candidates.push(name),
            FileKind::TermsFile { locale } => terms_files.push(TermsFile { file_name: name, locale }),
            FileKind::Unrecognized => {}
        }
    }

    if terms_files.is_empty() {
        return Err(PropgenError::Discovery {
            dir: source_dir.to_path_buf(),
        });
    }

    let (keys_file, keys_selection) = select_keys_file(&keys_candidates, &terms_files);

    Ok(Classification {
        keys_file,
        keys_selection,
        terms_files,
    })
}

/// Apply the keys-source fallback chain; `terms_files` must not be empty
fn select_keys_file(keys_candidates: &[String], terms_files: &[TermsFile]) -> (String, KeysSelection) {
    if let [keys_file] = keys_candidates {
        return (keys_file.clone(), KeysSelection::KeysFile);
    }

    if let [only] = terms_files {
        return (only.file_name.clone(), KeysSelection::SoleTermsFile);
    }

    if let Some(english) = terms_files
        .iter()
        .find(|f| f.locale.contains(ENGLISH_LOCALE_MARKER))
    {
        return (english.file_name.clone(), KeysSelection::EnglishTermsFile);
    }

    (terms_files[0].file_name.clone(), KeysSelection::FirstTermsFile)
}
