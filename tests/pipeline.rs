use bandgen::constants::{START_TOKEN, STOP_TOKEN};
use bandgen::{decode_scores, one_hot_bracketed, Alphabet, Corpus};
use std::fs;
use std::path::PathBuf;

const CORPUS_YAML: &str = "rock:\n  - AB\n  - BA\nmetal:\n  - CAB\n";

fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bandgen-{}-{}", label, std::process::id()));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn compile_save_load_encode_decode() {
    let dir = temp_dir("pipeline");
    let corpus_path = dir.join("band_names.yml");
    let alphabet_path = dir.join("alphabet.yml");
    fs::write(&corpus_path, CORPUS_YAML).expect("failed to write corpus");

    let corpus = Corpus::load(&corpus_path).expect("corpus should load");
    let alphabet = Alphabet::compile(&corpus);

    // Sentinels first, then the sorted corpus characters.
    assert_eq!(
        alphabet.characters(),
        &[START_TOKEN, STOP_TOKEN, 'A', 'B', 'C']
    );

    alphabet.save(&alphabet_path).expect("alphabet should save");
    let reloaded = Alphabet::load(&alphabet_path).expect("alphabet should reload");
    assert_eq!(reloaded.characters(), alphabet.characters());

    let encoded = one_hot_bracketed("CAB", &reloaded).expect("encode should succeed");
    assert_eq!(encoded.shape(), &[5, 5]);
    let decoded = decode_scores(encoded.view(), &reloaded).expect("decode should succeed");
    assert_eq!(decoded, "CAB");

    fs::remove_dir_all(&dir).expect("failed to clean temp dir");
}

#[test]
fn compiling_twice_is_deterministic() {
    let corpus_a = Corpus::from_yaml(CORPUS_YAML).expect("corpus should parse");
    let corpus_b = Corpus::from_yaml(CORPUS_YAML).expect("corpus should parse");
    assert_eq!(
        Alphabet::compile(&corpus_a).characters(),
        Alphabet::compile(&corpus_b).characters()
    );
}

#[test]
fn load_or_compile_recovers_from_missing_alphabet() {
    let dir = temp_dir("recompile");
    let corpus_path = dir.join("band_names.yml");
    let alphabet_path = dir.join("alphabet.yml");
    fs::write(&corpus_path, CORPUS_YAML).expect("failed to write corpus");

    assert!(!alphabet_path.exists());
    let alphabet = Alphabet::load_or_compile(&alphabet_path, &corpus_path)
        .expect("should compile from corpus");
    assert_eq!(alphabet.len(), 5);

    // The compiled alphabet was persisted and loads on its own now.
    let reloaded = Alphabet::load(&alphabet_path).expect("alphabet should reload");
    assert_eq!(reloaded.characters(), alphabet.characters());

    fs::remove_dir_all(&dir).expect("failed to clean temp dir");
}

#[test]
fn load_or_compile_recovers_from_empty_alphabet_file() {
    let dir = temp_dir("empty");
    let corpus_path = dir.join("band_names.yml");
    let alphabet_path = dir.join("alphabet.yml");
    fs::write(&corpus_path, CORPUS_YAML).expect("failed to write corpus");
    fs::write(&alphabet_path, "").expect("failed to write empty alphabet");

    let alphabet = Alphabet::load_or_compile(&alphabet_path, &corpus_path)
        .expect("should recompile over the empty file");
    assert_eq!(alphabet.len(), 5);

    fs::remove_dir_all(&dir).expect("failed to clean temp dir");
}

#[test]
fn load_or_compile_fails_without_corpus() {
    let dir = temp_dir("no-corpus");
    let corpus_path = dir.join("band_names.yml");
    let alphabet_path = dir.join("alphabet.yml");

    let err = Alphabet::load_or_compile(&alphabet_path, &corpus_path)
        .expect_err("missing corpus should fail, not loop");
    assert!(
        err.to_string().contains("recompiling alphabet"),
        "unexpected error: {err:#}"
    );

    fs::remove_dir_all(&dir).expect("failed to clean temp dir");
}

#[test]
fn load_rejects_multi_character_entries() {
    let dir = temp_dir("malformed");
    let alphabet_path = dir.join("alphabet.yml");
    fs::write(&alphabet_path, "- A\n- BC\n").expect("failed to write alphabet");

    let err = Alphabet::load(&alphabet_path).expect_err("multi-char entry should fail");
    assert!(
        err.to_string().contains("not a single character"),
        "unexpected error: {err}"
    );

    fs::remove_dir_all(&dir).expect("failed to clean temp dir");
}
