//! Alphabet compilation, persistence, and character/index lookup.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::constants::{START_TOKEN, STOP_TOKEN};
use crate::Corpus;

/// Immutable bidirectional mapping between characters and their indices.
///
/// `index` is the exact inverse of `characters`: for every valid `i`,
/// `index_of(char_at(i)) == i`. Constructed once from a corpus or a
/// persisted file; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Alphabet {
    characters: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from an ordered character sequence.
    ///
    /// Duplicates are skipped; the first occurrence keeps its position.
    pub fn new(characters: impl IntoIterator<Item = char>) -> Self {
        let mut chars = Vec::new();
        let mut index = HashMap::new();
        for ch in characters {
            if index.contains_key(&ch) {
                continue;
            }
            index.insert(ch, chars.len());
            chars.push(ch);
        }
        Alphabet {
            characters: chars,
            index,
        }
    }

    /// Compile the tokenizing alphabet from a corpus.
    ///
    /// The start and stop sentinels come first, in that fixed order,
    /// followed by every character appearing in the corpus, sorted.
    pub fn compile(corpus: &Corpus) -> Self {
        let sentinels = [START_TOKEN, STOP_TOKEN];
        Alphabet::new(sentinels.into_iter().chain(corpus.unique_characters()))
    }

    /// Load an alphabet from a YAML file written by [`Alphabet::save`].
    ///
    /// Fails if the file is missing or malformed, if any entry is not a
    /// single character, or if the list is empty.
    pub fn load(path: &Path) -> Result<Self> {
        let characters = read_characters(path)?;
        if characters.is_empty() {
            anyhow::bail!("Alphabet file {:?} is empty", path);
        }
        Ok(Alphabet::new(characters))
    }

    /// Load an alphabet, compiling one from the corpus if none exists.
    ///
    /// If the alphabet file is missing or parses to an empty list, the
    /// corpus is compiled exactly once and the result saved to
    /// `alphabet_path`. A missing or malformed corpus fails explicitly;
    /// there is no second attempt.
    pub fn load_or_compile(alphabet_path: &Path, corpus_path: &Path) -> Result<Self> {
        if alphabet_path.exists() {
            let characters = read_characters(alphabet_path)?;
            if !characters.is_empty() {
                return Ok(Alphabet::new(characters));
            }
        }

        let corpus = Corpus::load(corpus_path)
            .context("Failed to load corpus while recompiling alphabet")?;
        let alphabet = Alphabet::compile(&corpus);
        alphabet.save(alphabet_path)?;
        Ok(alphabet)
    }

    /// Write the character sequence to a YAML file as a flat list of
    /// single-character strings. Overwrites the destination.
    pub fn save(&self, path: &Path) -> Result<()> {
        let entries: Vec<String> = self.characters.iter().map(char::to_string).collect();
        let yaml = serde_yaml::to_string(&entries).context("Failed to serialize alphabet")?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write alphabet file {:?}", path))?;
        Ok(())
    }

    /// The character at `index`. Out-of-range indices are an error.
    pub fn char_at(&self, index: usize) -> Result<char> {
        self.characters.get(index).copied().ok_or_else(|| {
            anyhow::anyhow!(
                "Index {} out of range for alphabet of {} characters",
                index,
                self.characters.len()
            )
        })
    }

    /// The index of `ch`. Characters absent from the alphabet are an error.
    pub fn index_of(&self, ch: char) -> Result<usize> {
        self.index.get(&ch).copied().ok_or_else(|| {
            anyhow::anyhow!("Character {:?} is not in the alphabet", ch)
        })
    }

    /// Resolve a numeric tensor scalar to its character.
    ///
    /// Thin adapter over [`Alphabet::char_at`]: the value must be a
    /// non-negative whole number, so a stray score cannot silently
    /// truncate to a valid index.
    pub fn char_at_scalar(&self, value: f32) -> Result<char> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
            anyhow::bail!("Encoded index must be a non-negative whole number, got {}", value);
        }
        self.char_at(value as usize)
    }

    /// True for the start/stop sentinel characters.
    pub fn is_sentinel(ch: char) -> bool {
        ch == START_TOKEN || ch == STOP_TOKEN
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check if the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// The characters in index order.
    pub fn characters(&self) -> &[char] {
        &self.characters
    }
}

/// Parse an alphabet file into its character sequence.
///
/// An entirely blank file is treated as an empty list so the loader can
/// distinguish "nothing here yet" from a malformed file.
fn read_characters(path: &Path) -> Result<Vec<char>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read alphabet file {:?}", path))?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<String> =
        serde_yaml::from_str(&text).context("Failed to parse alphabet YAML")?;

    let mut characters = Vec::with_capacity(entries.len());
    for entry in &entries {
        let mut chars = entry.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => characters.push(ch),
            _ => anyhow::bail!(
                "Alphabet entry {:?} in {:?} is not a single character",
                entry,
                path
            ),
        }
    }
    Ok(characters)
}
