//! Main spelling corrector that rewrites text with dictionary corrections.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{Result, SpellerError};
use crate::spelling::best_match::{MatchResult, best_match_result, par_best_match_result};
use crate::spelling::dictionary::{Dictionary, MAX_WORD_LENGTH};
use crate::spelling::tokenizer::{Token, Tokenizer};

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Longest word, in bytes, that is spell-checked.
    pub max_word_length: usize,
    /// Whether to scan the dictionary on the rayon pool.
    pub parallel: bool,
    /// Number of dictionary partitions for parallel scans.
    pub partitions: usize,
    /// Smallest dictionary for which a parallel scan is used.
    pub parallel_threshold: usize,
    /// Compute corrections without rewriting files.
    pub dry_run: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_word_length: MAX_WORD_LENGTH,
            parallel: true,
            partitions: num_cpus::get(),
            parallel_threshold: 10_000,
            dry_run: false,
        }
    }
}

impl CorrectorConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_word_length == 0 {
            return Err(SpellerError::config("max_word_length must be positive"));
        }
        if self.partitions == 0 {
            return Err(SpellerError::config("partitions must be positive"));
        }
        Ok(())
    }
}

/// A single substitution applied to the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The misspelled word as it appeared.
    pub original: String,
    /// The dictionary word substituted for it.
    pub replacement: String,
    /// Edit distance between the two.
    pub distance: usize,
    /// Byte offset of the misspelled word in the input text.
    pub offset: usize,
}

/// Time spent in each phase of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    /// Loading the dictionary.
    pub load: Duration,
    /// Dictionary membership tests.
    pub check: Duration,
    /// Counting dictionary entries.
    pub size: Duration,
    /// Releasing the dictionary.
    pub unload: Duration,
}

impl Timings {
    /// Sum of all phases.
    pub fn total(&self) -> Duration {
        self.load + self.check + self.size + self.unload
    }
}

/// Result of correcting one text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionReport {
    /// The rewritten text, byte for byte.
    pub corrected: Vec<u8>,
    /// Substitutions in text order.
    pub corrections: Vec<Correction>,
    /// Number of word runs in the text, including runs with digits or other
    /// non-letters. Runs over the length limit are not counted.
    pub words_in_text: usize,
    /// Time spent in dictionary membership tests.
    pub check_time: Duration,
}

impl CorrectionReport {
    /// The rewritten text, with invalid UTF-8 replaced for display.
    pub fn corrected_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.corrected)
    }

    /// Number of misspelled words.
    pub fn misspellings(&self) -> usize {
        self.corrections.len()
    }

    /// Check if any corrections were made.
    pub fn has_corrections(&self) -> bool {
        !self.corrections.is_empty()
    }
}

/// Spelling corrector over a loaded dictionary.
pub struct SpellingCorrector {
    dictionary: Dictionary,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a new spelling corrector with the default configuration.
    pub fn new(dictionary: Dictionary) -> Self {
        SpellingCorrector {
            dictionary,
            config: CorrectorConfig::default(),
        }
    }

    /// Create a new spelling corrector with custom configuration.
    pub fn with_config(dictionary: Dictionary, config: CorrectorConfig) -> Self {
        SpellingCorrector { dictionary, config }
    }

    /// Get the dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Get the current configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Give the dictionary back, e.g. to unload it.
    pub fn into_dictionary(self) -> Dictionary {
        self.dictionary
    }

    /// Check a single word against the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.check(word)
    }

    /// Find the best dictionary replacement for `word`.
    pub fn suggest<'a>(&'a self, word: &str) -> Result<MatchResult<'a>> {
        let words = self.dictionary.words();
        if self.config.parallel && words.len() >= self.config.parallel_threshold {
            par_best_match_result(word, words, self.config.partitions)
        } else {
            best_match_result(word, words)
        }
    }

    /// Correct every misspelled word in `text`.
    pub fn correct_text(&self, text: &str) -> Result<CorrectionReport> {
        self.correct_bytes(text.as_bytes())
    }

    /// Correct every misspelled word in raw text bytes.
    ///
    /// Separators, skipped and overlong runs are copied unchanged, whatever
    /// their encoding.
    pub fn correct_bytes(&self, text: &[u8]) -> Result<CorrectionReport> {
        let mut corrected = Vec::with_capacity(text.len());
        let mut corrections = Vec::new();
        let mut words_in_text = 0;
        let mut check_time = Duration::ZERO;

        for (offset, token) in Tokenizer::new(text, self.config.max_word_length) {
            if token.is_word_run() {
                words_in_text += 1;
            }

            let Token::Word(word) = token else {
                corrected.extend_from_slice(token.as_bytes());
                continue;
            };

            let start_time = Instant::now();
            let correct = self.is_correct(word);
            check_time += start_time.elapsed();

            if correct {
                corrected.extend_from_slice(word.as_bytes());
                continue;
            }

            let best = self.suggest(word)?;
            debug!("{} -> {} (distance {})", word, best.word, best.distance);
            corrected.extend_from_slice(best.word.as_bytes());
            corrections.push(Correction {
                original: word.to_string(),
                replacement: best.word.to_string(),
                distance: best.distance,
                offset,
            });
        }

        Ok(CorrectionReport {
            corrected,
            corrections,
            words_in_text,
            check_time,
        })
    }

    /// Correct a text file in place.
    ///
    /// The corrected text goes to a temporary file in the same directory,
    /// which takes over the original's permissions and then replaces it.
    /// Nothing is written in dry-run mode.
    pub fn correct_file<P: AsRef<Path>>(&self, path: P) -> Result<CorrectionReport> {
        let path = path.as_ref();
        let text = fs::read(path)?;
        let report = self.correct_bytes(&text)?;

        if self.config.dry_run {
            info!("Dry run, leaving {} unchanged", path.display());
            return Ok(report);
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let permissions = fs::metadata(path)?.permissions();
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(&report.corrected)?;
        temp.flush()?;
        temp.as_file().set_permissions(permissions)?;
        temp.persist(path).map_err(|e| SpellerError::Io(e.error))?;

        info!(
            "Rewrote {} with {} corrections",
            path.display(),
            report.misspellings()
        );
        Ok(report)
    }
}
