//! Band-name corpus loading.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Corpus of band names grouped by category.
///
/// Categories are kept in a `BTreeMap` so iteration order (and therefore
/// everything derived from the corpus) is deterministic.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    #[serde(flatten)]
    categories: BTreeMap<String, Vec<String>>,
}

impl Corpus {
    /// Load a corpus from a YAML file.
    ///
    /// The file should be a mapping from category keys to lists of names:
    /// ```yaml
    /// rock:
    ///   - The Example
    /// metal:
    ///   - Ironclad
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open corpus file {:?}", path))?;
        let reader = BufReader::new(file);
        let corpus: Corpus =
            serde_yaml::from_reader(reader).context("Failed to parse corpus YAML")?;
        Ok(corpus)
    }

    /// Parse a corpus from a YAML string.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse corpus YAML")
    }

    /// Iterate over every name across all categories.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories
            .values()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    /// All names, deduplicated and sorted.
    pub fn names_sorted_unique(&self) -> Vec<&str> {
        let unique: BTreeSet<&str> = self.names().collect();
        unique.into_iter().collect()
    }

    /// Every character appearing in any name, deduplicated and sorted.
    ///
    /// Deterministic: the same corpus always yields the same sequence.
    pub fn unique_characters(&self) -> Vec<char> {
        let unique: BTreeSet<char> = self.names().flat_map(str::chars).collect();
        unique.into_iter().collect()
    }

    /// Number of categories in the corpus.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the corpus has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
