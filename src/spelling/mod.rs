//! Spell-checking and correction for Speller.
//!
//! This module provides the edit-distance metric, nearest dictionary word
//! selection, the dictionary store, the text tokenizer and the corrector that
//! ties them together.

pub mod best_match;
pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod tokenizer;

// Re-export commonly used types
pub use best_match::*;
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use tokenizer::*;
