//! One-hot tokenization and score-vector detokenization.

use anyhow::Result;
use ndarray::{Array2, ArrayView2};

use crate::constants::{START_TOKEN, STOP_TOKEN};
use crate::Alphabet;

/// Encode a name as a one-hot tensor of shape `[chars, alphabet_size]`.
///
/// Row `i` is 1.0 at the index of the name's `i`-th character and 0.0
/// elsewhere. Any character absent from the alphabet fails the whole
/// call; no partial tensor is returned.
pub fn one_hot(name: &str, alphabet: &Alphabet) -> Result<Array2<f32>> {
    let chars: Vec<char> = name.chars().collect();
    let mut encoded = Array2::<f32>::zeros((chars.len(), alphabet.len()));
    for (row, &ch) in chars.iter().enumerate() {
        let col = alphabet.index_of(ch)?;
        encoded[[row, col]] = 1.0;
    }
    Ok(encoded)
}

/// Encode a name wrapped in the start/stop sentinels.
///
/// This is the training-time encoding: the sentinels delimit the name so
/// the recurrent model can learn where names begin and end.
pub fn one_hot_bracketed(name: &str, alphabet: &Alphabet) -> Result<Array2<f32>> {
    let wrapped = format!("{START_TOKEN}{name}{STOP_TOKEN}");
    one_hot(&wrapped, alphabet)
}

/// Decode a matrix of per-position score vectors back into a name.
///
/// Each row selects the index of its maximum value (ties broken by the
/// first occurrence), resolved to a character via the alphabet. Sentinel
/// characters are omitted from the output.
pub fn decode_scores(scores: ArrayView2<'_, f32>, alphabet: &Alphabet) -> Result<String> {
    if scores.ncols() != alphabet.len() {
        anyhow::bail!(
            "Score vectors have {} columns but the alphabet has {} characters",
            scores.ncols(),
            alphabet.len()
        );
    }

    let mut name = String::new();
    for row in scores.rows() {
        let mut best = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (i, &score) in row.iter().enumerate() {
            if score > best_score {
                best = i;
                best_score = score;
            }
        }
        let ch = alphabet.char_at(best)?;
        if Alphabet::is_sentinel(ch) {
            continue;
        }
        name.push(ch);
    }
    Ok(name)
}
