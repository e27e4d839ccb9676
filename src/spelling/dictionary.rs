//! Dictionary management for spelling correction.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{Result, SpellerError};

/// Longest word, in bytes, the checker accepts.
pub const MAX_WORD_LENGTH: usize = 45;

/// An ordered word list with a membership index.
///
/// Enumeration order is the load order, which decides tie-breaks during best
/// match selection. Duplicate entries are kept.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Words in load order
    words: Vec<String>,
    /// Lowercased words for membership tests
    word_set: HashSet<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// Build a dictionary from words in the given order.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.add_word(word.into())?;
        }
        Ok(dictionary)
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Lines are trimmed and blank lines skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut dictionary = Dictionary::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            dictionary.add_word(word.to_string()).map_err(|e| {
                SpellerError::dictionary(format!(
                    "{} line {}: {}",
                    path.display(),
                    line_num + 1,
                    e
                ))
            })?;
        }

        info!(
            "Loaded {} words from {}",
            dictionary.size(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Append a word to the dictionary.
    pub fn add_word(&mut self, word: String) -> Result<()> {
        if word.len() > MAX_WORD_LENGTH {
            return Err(SpellerError::dictionary(format!(
                "word '{word}' exceeds {MAX_WORD_LENGTH} bytes"
            )));
        }

        self.word_set.insert(word.to_ascii_lowercase());
        self.words.push(word);
        Ok(())
    }

    /// Check if a word exists in the dictionary, ignoring ASCII case.
    pub fn check(&self, word: &str) -> bool {
        self.word_set.contains(&word.to_ascii_lowercase())
    }

    /// Get the number of entries, duplicates included.
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get all words in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Release all entries.
    pub fn unload(&mut self) -> Result<()> {
        debug!("Unloading {} words", self.words.len());
        self.words = Vec::new();
        self.word_set = HashSet::new();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = Dictionary::new();

        assert!(!dict.check("hello"));
        assert_eq!(dict.size(), 0);
        assert!(dict.is_empty());

        dict.add_word("hello".to_string()).unwrap();
        assert!(dict.check("hello"));
        assert_eq!(dict.size(), 1);

        dict.add_word("world".to_string()).unwrap();
        assert_eq!(dict.size(), 2);
        assert_eq!(dict.words(), &["hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn test_check_case_insensitive() {
        let dict = Dictionary::from_words(["hello"]).unwrap();
        assert!(dict.check("hello"));
        assert!(dict.check("HELLO"));
        assert!(dict.check("Hello"));
        assert!(!dict.check("help"));
    }

    #[test]
    fn test_words_keep_order_and_duplicates() {
        let dict = Dictionary::from_words(["tight", "light", "tight"]).unwrap();
        assert_eq!(dict.size(), 3);
        assert_eq!(dict.words()[0], "tight");
        assert_eq!(dict.words()[1], "light");
        assert_eq!(dict.words()[2], "tight");
    }

    #[test]
    fn test_rejects_long_words() {
        let long = "a".repeat(MAX_WORD_LENGTH + 1);
        let result = Dictionary::from_words([long]);
        assert!(matches!(result, Err(SpellerError::Dictionary(_))));

        let longest = "a".repeat(MAX_WORD_LENGTH);
        assert!(Dictionary::from_words([longest]).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello").unwrap();
        writeln!(temp_file, "  world  ").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "hello").unwrap();
        temp_file.flush().unwrap();

        let dict = Dictionary::load(temp_file.path()).unwrap();
        assert_eq!(dict.size(), 3);
        assert_eq!(dict.words()[1], "world");
        assert!(dict.check("world"));
    }

    #[test]
    fn test_load_reports_line_number() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "fine").unwrap();
        writeln!(temp_file, "{}", "x".repeat(MAX_WORD_LENGTH + 5)).unwrap();
        temp_file.flush().unwrap();

        let error = Dictionary::load(temp_file.path()).unwrap_err();
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dictionary::load("/nonexistent/dictionary/path");
        assert!(matches!(result, Err(SpellerError::Io(_))));
    }

    #[test]
    fn test_unload() {
        let mut dict = Dictionary::from_words(["hello", "world"]).unwrap();
        dict.unload().unwrap();
        assert_eq!(dict.size(), 0);
        assert!(!dict.check("hello"));

        // Unloading twice is harmless
        dict.unload().unwrap();
    }
}
