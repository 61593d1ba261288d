//! Properties bundle assembly
//!
//! Pairs keys with terms by position and renders the `key = value` lines of
//! one locale's bundle.

use crate::utils::errors::{PropgenError, Result};

/// One locale's properties, in keys-file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    locale: String,
    entries: Vec<(String, String)>,
}

impl Bundle {
    /// Pair `keys[i]` with `terms[i]`; both lists must have the same length
    pub fn assemble(locale: &str, keys: &[String], terms: Vec<String>) -> Result<Self> {
        if keys.len() != terms.len() {
            return Err(PropgenError::Cardinality {
                locale: locale.to_string(),
                keys: keys.len(),
                terms: terms.len(),
            });
        }

        Ok(Self {
            locale: locale.to_string(),
            entries: keys.iter().cloned().zip(terms).collect(),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Output file name, `i18n_<locale>.properties`
    pub fn file_name(&self) -> String {
        bundle_file_name(&self.locale)
    }

    /// Render one `key = value` line per entry, each ending in `\n`
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, term) in &self.entries {
            out.push_str(key);
            out.push_str(" = ");
            out.push_str(term);
            out.push('\n');
        }
        out
    }
}

/// Name of the bundle written for `locale`
pub fn bundle_file_name(locale: &str) -> String {
    format!("i18n_{}.properties", locale)
}
