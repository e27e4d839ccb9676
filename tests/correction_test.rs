use std::fs;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::{NamedTempFile, TempDir};

use speller::error::SpellerError;
use speller::spelling::{
    CorrectorConfig, Dictionary, SpellingCorrector, best_match, best_match_result,
    par_best_match_result,
};

fn write_dictionary(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{word}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn random_word(rng: &mut StdRng) -> String {
    let alphabet = b"abcd";
    let len = rng.random_range(0..6);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

#[test]
fn test_selection_examples() {
    assert_eq!(
        best_match("ligth", &["light", "sight", "tight"]).unwrap(),
        "light"
    );
    assert_eq!(best_match("bat", &["cat", "bag"]).unwrap(), "bag");
    assert_eq!(best_match("cat", &["cats", "cut"]).unwrap(), "cut");
    assert_eq!(best_match("cat", &["cut", "cot"]).unwrap(), "cut");

    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        best_match("cat", &empty),
        Err(SpellerError::EmptyDictionary)
    ));
}

#[test]
fn test_parallel_selection_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let size = rng.random_range(1..200);
        let words: Vec<String> = (0..size).map(|_| random_word(&mut rng)).collect();
        let target = random_word(&mut rng);

        let expected = best_match_result(&target, &words).unwrap();
        for partitions in [1, 2, 3, 8, 64] {
            assert_eq!(
                par_best_match_result(&target, &words, partitions).unwrap(),
                expected
            );
        }
    }
}

#[test]
fn test_correct_file_in_place() {
    let dictionary_file = write_dictionary(&["the", "light", "sight", "tight", "is", "on"]);
    let dir = TempDir::new().unwrap();
    let text_path = dir.path().join("text.txt");
    fs::write(&text_path, "The ligth is on, 100 tmies.\n").unwrap();

    let dictionary = Dictionary::load(dictionary_file.path()).unwrap();
    let corrector = SpellingCorrector::new(dictionary);
    let report = corrector.correct_file(&text_path).unwrap();

    let rewritten = fs::read_to_string(&text_path).unwrap();
    assert_eq!(rewritten, report.corrected_text());
    assert!(rewritten.starts_with("The light is on, 100 "));
    assert!(rewritten.ends_with(".\n"));
    assert_eq!(report.words_in_text, 6);
    assert_eq!(report.misspellings(), 2);
    assert_eq!(report.corrections[0].original, "ligth");
    assert_eq!(report.corrections[1].original, "tmies");

    // The temporary file was renamed over the original
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_dry_run_leaves_file() {
    let dictionary = Dictionary::from_words(["light"]).unwrap();
    let config = CorrectorConfig {
        dry_run: true,
        ..Default::default()
    };
    let corrector = SpellingCorrector::with_config(dictionary, config);

    let dir = TempDir::new().unwrap();
    let text_path = dir.path().join("text.txt");
    fs::write(&text_path, "ligth").unwrap();

    let report = corrector.correct_file(&text_path).unwrap();
    assert_eq!(report.corrected_text(), "light");
    assert_eq!(fs::read_to_string(&text_path).unwrap(), "ligth");
}

#[test]
fn test_missing_text_file() {
    let corrector = SpellingCorrector::new(Dictionary::from_words(["light"]).unwrap());
    let result = corrector.correct_file("/nonexistent/text.txt");
    assert!(matches!(result, Err(SpellerError::Io(_))));
}

#[test]
fn test_correct_file_with_latin1_bytes() {
    let corrector = SpellingCorrector::new(Dictionary::from_words(["light", "ok"]).unwrap());
    let dir = TempDir::new().unwrap();
    let text_path = dir.path().join("latin1.txt");
    fs::write(&text_path, b"ligth caf\xe9 ok\n").unwrap();

    let report = corrector.correct_file(&text_path).unwrap();
    assert_eq!(report.misspellings(), 1);
    assert_eq!(fs::read(&text_path).unwrap(), b"light caf\xe9 ok\n");
}

#[cfg(unix)]
#[test]
fn test_correct_file_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let corrector = SpellingCorrector::new(Dictionary::from_words(["light"]).unwrap());
    let dir = TempDir::new().unwrap();
    let text_path = dir.path().join("text.txt");
    fs::write(&text_path, "ligth\n").unwrap();
    fs::set_permissions(&text_path, fs::Permissions::from_mode(0o644)).unwrap();

    corrector.correct_file(&text_path).unwrap();

    let mode = fs::metadata(&text_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
    assert_eq!(fs::read_to_string(&text_path).unwrap(), "light\n");
}
