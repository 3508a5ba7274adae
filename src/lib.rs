//! Band-Name Tokenization Library
//!
//! A Rust library for the data side of a character-level band-name
//! generator: compile a character alphabet from a YAML corpus of band
//! names, persist and reload it, and convert names to and from one-hot
//! tensors for an external recurrent model.

pub mod alphabet;
pub mod corpus;
pub mod encoding;
pub mod tensors;

pub use alphabet::Alphabet;
pub use corpus::Corpus;
pub use encoding::{decode_scores, one_hot, one_hot_bracketed};
pub use tensors::{load_tensor, save_tensor};

/// Static constants shared by the compiler, tokenizer, and detokenizer.
pub mod constants {
    /// Sentinel marking the start of a name. Always index 0 of a compiled alphabet.
    pub const START_TOKEN: char = '\t';
    /// Sentinel marking the end of a name. Always index 1 of a compiled alphabet.
    pub const STOP_TOKEN: char = '\n';

    pub const DEFAULT_CORPUS_PATH: &str = "data/band_names.yml";
    pub const DEFAULT_ALPHABET_PATH: &str = "data/alphabet.yml";
}
