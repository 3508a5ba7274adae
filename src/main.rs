//! CLI entry point for the band-name tokenization pipeline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bandgen::constants::{DEFAULT_ALPHABET_PATH, DEFAULT_CORPUS_PATH};
use bandgen::{decode_scores, load_tensor, one_hot, one_hot_bracketed, save_tensor};
use bandgen::{Alphabet, Corpus};

#[derive(Parser, Debug)]
#[command(name = "bandgen")]
#[command(about = "Character-level tokenization pipeline for band-name generation")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile the character alphabet from the band-name corpus
    Compile {
        /// Path to the band-name corpus YAML
        #[arg(short, long, default_value = DEFAULT_CORPUS_PATH)]
        corpus: PathBuf,

        /// Destination path for the compiled alphabet YAML
        #[arg(short, long, default_value = DEFAULT_ALPHABET_PATH)]
        out: PathBuf,
    },

    /// Encode a band name into a one-hot tensor (.npy)
    Encode {
        /// The name to encode
        name: String,

        /// Output .npy file path
        #[arg(short, long, default_value = "encoded.npy")]
        output: PathBuf,

        /// Encode the bare name without start/stop sentinels
        #[arg(long)]
        raw: bool,

        /// Path to the alphabet YAML (compiled from the corpus if missing)
        #[arg(long, default_value = DEFAULT_ALPHABET_PATH)]
        alphabet: PathBuf,

        /// Path to the corpus YAML, used if the alphabet must be compiled
        #[arg(long, default_value = DEFAULT_CORPUS_PATH)]
        corpus: PathBuf,
    },

    /// Decode a score-matrix tensor (.npy) back into a name
    Decode {
        /// Input .npy file of per-position score vectors
        input: PathBuf,

        /// Path to the alphabet YAML (compiled from the corpus if missing)
        #[arg(long, default_value = DEFAULT_ALPHABET_PATH)]
        alphabet: PathBuf,

        /// Path to the corpus YAML, used if the alphabet must be compiled
        #[arg(long, default_value = DEFAULT_CORPUS_PATH)]
        corpus: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Compile { corpus, out } => {
            println!("Loading corpus from {:?}...", corpus);
            let corpus = Corpus::load(&corpus).context("Failed to load corpus")?;
            let names = corpus.names_sorted_unique();

            let alphabet = Alphabet::compile(&corpus);
            alphabet.save(&out).context("Failed to save alphabet")?;
            println!(
                "Compiled alphabet of {} characters from {} unique names in {} categories, saved to {:?}.",
                alphabet.len(),
                names.len(),
                corpus.len(),
                out
            );
        }

        Command::Encode {
            name,
            output,
            raw,
            alphabet,
            corpus,
        } => {
            let alphabet = Alphabet::load_or_compile(&alphabet, &corpus)
                .context("Failed to load alphabet")?;
            println!("Alphabet loaded ({} characters).", alphabet.len());

            let encoded = if raw {
                one_hot(&name, &alphabet)
            } else {
                one_hot_bracketed(&name, &alphabet)
            }
            .context("Failed to encode name")?;

            save_tensor(&output, &encoded).context("Failed to save tensor")?;
            println!(
                "Encoded {:?} as a {}x{} tensor, saved to {:?}.",
                name,
                encoded.nrows(),
                encoded.ncols(),
                output
            );
        }

        Command::Decode {
            input,
            alphabet,
            corpus,
        } => {
            let alphabet = Alphabet::load_or_compile(&alphabet, &corpus)
                .context("Failed to load alphabet")?;
            println!("Alphabet loaded ({} characters).", alphabet.len());

            let scores = load_tensor(&input).context("Failed to load score tensor")?;
            let name =
                decode_scores(scores.view(), &alphabet).context("Failed to decode scores")?;
            println!("{}", name);
        }
    }

    Ok(())
}
